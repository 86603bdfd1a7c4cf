use super::*;

#[test]
fn empty_book_has_no_faces() {
    assert_eq!(FontBook::empty().face_count(), 0);
}

#[test]
fn clones_share_the_database() {
    let a = FontBook::empty();
    let b = a.clone();
    assert!(Arc::ptr_eq(&a.db, &b.db));
}

#[test]
fn missing_and_non_font_dirs_are_skipped() {
    let dir = std::env::temp_dir().join(format!(
        "brushwork_fonts_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("notes.txt"), b"not a font").unwrap();
    std::fs::write(dir.join("broken.ttf"), b"not a font either").unwrap();

    let mut db = Database::new();
    assert_eq!(load_fonts_from_dir(&mut db, &dir), 0);
    assert_eq!(load_fonts_from_dir(&mut db, &dir.join("does-not-exist")), 0);
    assert_eq!(db.len(), 0);
    assert!(is_font_file(&dir.join("broken.ttf")));
    assert!(!is_font_file(&dir.join("notes.txt")));
    assert!(!is_font_file(&dir));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn svg_options_use_the_book_database() {
    let book = FontBook::empty();
    let opts = book.svg_options();
    assert!(Arc::ptr_eq(&opts.fontdb, &book.db));
}
