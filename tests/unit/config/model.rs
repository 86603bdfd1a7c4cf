use super::*;
use serde_json::json;

#[test]
fn missing_fields_take_defaults() {
    let c: ImageConfig = serde_json::from_value(json!({"title": "Hello"})).unwrap();
    assert_eq!(c, ImageConfig::titled("Hello"));
    assert_eq!(c.palette_name, "brand");
    assert_eq!(c.seed, DEFAULT_SEED);
    assert_eq!(c.density, 15);
    assert_eq!(c.swath_count, 4);
    assert_eq!(c.direction, Direction::Mixed);
    assert_eq!(c.title_size, 72);
    assert_eq!(c.text_position, TextPosition::Top);
    assert!(!c.chromatic_title);
    assert_eq!(c.pattern, None);
    assert!(!c.grid);
    assert!(!c.accent_bar);
}

#[test]
fn decoration_keys_parse() {
    let c: ImageConfig = serde_json::from_value(json!({
        "title": "x",
        "pattern": "geometric",
        "grid": true,
        "accentBar": true
    }))
    .unwrap();
    assert_eq!(c.pattern, Some(Pattern::Geometric));
    assert!(c.grid && c.accent_bar);

    let r: Result<ImageConfig, _> =
        serde_json::from_value(json!({"title": "x", "pattern": "stars"}));
    assert!(r.is_err());
}

#[test]
fn camel_case_keys_and_lowercase_enums_parse() {
    let c: ImageConfig = serde_json::from_value(json!({
        "title": "Ben Siverly",
        "subtitle": "Product Manager, Builder, Gardener",
        "paletteName": "ocean",
        "seed": 42,
        "density": 20,
        "swathCount": 5,
        "direction": "horizontal",
        "titleSize": 84,
        "textPosition": "bottom",
        "outputPath": "images/og-home.png",
        "chromaticTitle": true
    }))
    .unwrap();
    assert_eq!(c.palette_name, "ocean");
    assert_eq!(c.swath_count, 5);
    assert_eq!(c.direction, Direction::Horizontal);
    assert_eq!(c.text_position, TextPosition::Bottom);
    assert_eq!(c.output_path, PathBuf::from("images/og-home.png"));
    assert!(c.chromatic_title);
}

#[test]
fn palette_alias_is_accepted() {
    let c: ImageConfig = serde_json::from_value(json!({"title": "x", "palette": "forest"})).unwrap();
    assert_eq!(c.palette_name, "forest");
}

#[test]
fn unknown_direction_is_a_parse_error() {
    let r: Result<ImageConfig, _> =
        serde_json::from_value(json!({"title": "x", "direction": "diagonal"}));
    assert!(r.is_err());
}

#[test]
fn blank_title_fails_validation_with_index() {
    let err = ImageConfig::titled("   ").validate(4).unwrap_err();
    assert!(err.is_config());
    assert!(err.to_string().contains("entry 4"));
    assert!(err.to_string().contains("title is required"));
    assert!(ImageConfig::default().validate(0).is_err());
}

#[test]
fn title_size_must_be_in_range() {
    let mut c = ImageConfig::titled("x");
    c.title_size = 0;
    assert!(c.validate(0).is_err());
    c.title_size = 84;
    assert!(c.validate(0).is_ok());
}

#[test]
fn blank_subtitle_counts_as_absent() {
    let mut c = ImageConfig::titled("x");
    assert_eq!(c.subtitle_text(), None);
    c.subtitle = Some("  ".to_owned());
    assert_eq!(c.subtitle_text(), None);
    c.subtitle = Some(" Builder ".to_owned());
    assert_eq!(c.subtitle_text(), Some("Builder"));
}

#[test]
fn text_position_opposite_flips() {
    assert_eq!(TextPosition::Top.opposite(), TextPosition::Bottom);
    assert_eq!(TextPosition::Bottom.opposite(), TextPosition::Top);
}

#[test]
fn paint_params_copy_seeded_fields() {
    let mut c = ImageConfig::titled("x");
    c.seed = 9;
    c.density = 3;
    c.swath_count = 2;
    c.direction = Direction::Vertical;
    assert_eq!(
        c.paint_params(),
        PaintParams {
            seed: 9,
            density: 3,
            swath_count: 2,
            direction: Direction::Vertical,
        }
    );
}

#[test]
fn negative_seeds_parse_and_map_to_their_bit_pattern() {
    let c: ImageConfig = serde_json::from_value(json!({"title": "x", "seed": -7})).unwrap();
    assert_eq!(c.seed, -7);
    assert_eq!(c.paint_params().seed, (-7i64) as u64);
    assert_eq!(c.paint_params().seed, u64::MAX - 6);

    let big: ImageConfig =
        serde_json::from_value(json!({"title": "x", "seed": i64::MAX})).unwrap();
    assert_eq!(big.paint_params().seed, i64::MAX as u64);
}

#[test]
fn accent_color_override_is_parsed_and_validated() {
    let mut c = ImageConfig::titled("x");
    assert_eq!(c.accent_override().unwrap(), None);

    c.accent_color = Some("#0D7377".to_owned());
    assert_eq!(c.accent_override().unwrap(), Some(Rgb::new(13, 115, 119)));
    c.validate(0).unwrap();

    c.accent_color = Some("teal".to_owned());
    let err = c.validate(2).unwrap_err();
    assert!(err.is_config());
    assert!(err.to_string().contains("accentColor"), "{err}");
}
