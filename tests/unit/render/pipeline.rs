use std::path::Path;

use super::*;
use crate::foundation::core::{HEIGHT, WIDTH};

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "brushwork_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

fn light(title: &str, seed: i64, out: &Path) -> ImageConfig {
    ImageConfig {
        seed,
        density: 2,
        swath_count: 1,
        output_path: out.to_path_buf(),
        ..ImageConfig::titled(title)
    }
}

#[test]
fn generate_rejects_a_missing_title() {
    let err = generate(&ImageConfig::default(), &FontBook::empty()).unwrap_err();
    assert!(err.is_config());
}

#[test]
fn generate_produces_fixed_size_frames() {
    let frame = generate(&light("Size", 3, Path::new("unused.png")), &FontBook::empty()).unwrap();
    assert_eq!((frame.width(), frame.height()), (WIDTH, HEIGHT));
    assert_eq!(frame.data().len(), (WIDTH * HEIGHT * 4) as usize);
}

#[test]
fn unknown_palette_matches_the_default_palette() {
    let fonts = FontBook::empty();
    let mut unknown = light("Fallback", 8, Path::new("unused.png"));
    unknown.palette_name = "no-such-palette".to_owned();
    let mut brand = unknown.clone();
    brand.palette_name = "brand".to_owned();
    assert_eq!(
        generate(&unknown, &fonts).unwrap(),
        generate(&brand, &fonts).unwrap()
    );
}

#[test]
fn batch_isolates_failures_and_keeps_input_order() {
    let root = temp_dir("pipeline_batch");
    std::fs::create_dir_all(&root).unwrap();
    let blocker = root.join("blocker");
    std::fs::write(&blocker, b"x").unwrap();

    let configs = vec![
        light("First", 1, &root.join("a.png")),
        light("  ", 2, &root.join("never.png")),
        light("Blocked", 3, &blocker.join("c.png")),
        light("Last", 4, &root.join("d.png")),
    ];
    let outcomes =
        generate_batch(&configs, &FontBook::empty(), &RenderThreading::default()).unwrap();

    assert_eq!(outcomes.len(), 4);
    assert_eq!(
        outcomes.iter().map(|o| o.index).collect::<Vec<_>>(),
        vec![0, 1, 2, 3]
    );
    assert!(outcomes[0].is_ok());
    assert!(matches!(
        outcomes[1].result,
        Err(BrushworkError::Config { index: 1, .. })
    ));
    assert!(matches!(outcomes[2].result, Err(BrushworkError::Io { .. })));
    assert!(outcomes[3].is_ok());

    assert!(root.join("a.png").is_file());
    assert!(!root.join("never.png").exists());
    assert!(root.join("d.png").is_file());

    let _ = std::fs::remove_dir_all(&root);
}

#[test]
fn parallel_batch_matches_sequential_batch() {
    let root = temp_dir("pipeline_parallel");
    let seq_configs: Vec<_> = (0..3)
        .map(|i| light("Par", i, &root.join(format!("seq{i}.png"))))
        .collect();
    let par_configs: Vec<_> = (0..3)
        .map(|i| light("Par", i, &root.join(format!("par{i}.png"))))
        .collect();
    let fonts = FontBook::empty();

    let seq = generate_batch(&seq_configs, &fonts, &RenderThreading::default()).unwrap();
    let par = generate_batch(
        &par_configs,
        &fonts,
        &RenderThreading {
            parallel: true,
            threads: Some(2),
        },
    )
    .unwrap();

    for (s, p) in seq.iter().zip(&par) {
        assert_eq!(s.index, p.index);
        let s = s.result.as_ref().unwrap();
        let p = p.result.as_ref().unwrap();
        assert_eq!(s.fingerprint, p.fingerprint);
    }

    let _ = std::fs::remove_dir_all(&root);
}

#[test]
fn zero_threads_is_rejected() {
    let err = generate_batch(
        &[],
        &FontBook::empty(),
        &RenderThreading {
            parallel: true,
            threads: Some(0),
        },
    )
    .unwrap_err();
    assert!(err.to_string().contains("threads"));
}

#[test]
fn generate_to_file_reports_the_frame_fingerprint() {
    let root = temp_dir("pipeline_file");
    let config = light("File", 5, &root.join("og.png"));
    let fonts = FontBook::empty();
    let written = generate_to_file(&config, &fonts).unwrap();
    assert_eq!(written.path, config.output_path);
    assert_eq!(written.fingerprint, generate(&config, &fonts).unwrap().fingerprint());

    let _ = std::fs::remove_dir_all(&root);
}
