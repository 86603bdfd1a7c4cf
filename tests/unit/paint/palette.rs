use super::*;

#[test]
fn every_palette_satisfies_group_minimums() {
    for name in PaletteName::ALL {
        let p = Palette::get(name);
        assert_eq!(p.name, name);
        assert!((3..=5).contains(&p.primary.len()), "{name} primary");
        assert!((3..=4).contains(&p.accent.len()), "{name} accent");
        assert_eq!(p.highlight.len(), 3, "{name} highlight");
    }
}

#[test]
fn background_hex_matches_background_color() {
    for name in PaletteName::ALL {
        let p = Palette::get(name);
        assert_eq!(Rgb::from_hex(p.background_hex).unwrap(), p.background);
    }
}

#[test]
fn lookup_is_case_insensitive() {
    assert_eq!(Palette::lookup("Ocean").name, PaletteName::Ocean);
    assert_eq!(Palette::lookup(" MIDNIGHT ").name, PaletteName::Midnight);
}

#[test]
fn unknown_name_falls_back_to_default() {
    assert_eq!(Palette::lookup("no-such-palette").name, PaletteName::DEFAULT);
    assert_eq!(Palette::lookup("").name, PaletteName::DEFAULT);
    assert!(std::ptr::eq(
        Palette::lookup("nope"),
        Palette::get(PaletteName::DEFAULT)
    ));
}

#[test]
fn names_round_trip_through_parse() {
    for key in Palette::names() {
        let name = PaletteName::parse(key).unwrap();
        assert_eq!(name.as_str(), key);
    }
    assert_eq!(Palette::names().count(), PaletteName::ALL.len());
}

#[test]
fn darkness_uses_the_leading_nibble() {
    assert!(Palette::get(PaletteName::Ocean).is_dark());
    assert!(Palette::get(PaletteName::Midnight).is_dark());
    assert!(Palette::get(PaletteName::Ember).is_dark());
    assert!(!Palette::get(PaletteName::Brand).is_dark());
    assert!(!Palette::get(PaletteName::Desert).is_dark());
}

#[test]
fn gestural_pool_is_primary_then_accent() {
    let p = Palette::get(PaletteName::Sunset);
    let pool = p.gestural_colors();
    assert_eq!(pool.len(), p.primary.len() + p.accent.len());
    assert_eq!(&pool[..p.primary.len()], p.primary);
    assert_eq!(&pool[p.primary.len()..], p.accent);
}
