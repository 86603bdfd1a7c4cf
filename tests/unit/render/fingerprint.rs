use super::*;

#[test]
fn fingerprint_is_deterministic() {
    let data = vec![7u8; 64];
    assert_eq!(fingerprint_rgba(4, 4, &data), fingerprint_rgba(4, 4, &data));
}

#[test]
fn fingerprint_changes_when_a_byte_changes() {
    let a = vec![0u8; 64];
    let mut b = a.clone();
    b[63] = 1;
    assert_ne!(fingerprint_rgba(4, 4, &a), fingerprint_rgba(4, 4, &b));
}

#[test]
fn fingerprint_includes_dimensions() {
    let data = vec![0u8; 64];
    assert_ne!(fingerprint_rgba(4, 4, &data), fingerprint_rgba(8, 2, &data));
}

#[test]
fn halves_use_different_seeds() {
    let fp = fingerprint_rgba(1, 1, &[1, 2, 3, 4]);
    assert_ne!(fp.hi, fp.lo);
}

#[test]
fn display_is_32_hex_digits() {
    let s = fingerprint_rgba(1, 1, &[0, 0, 0, 255]).to_string();
    assert_eq!(s.len(), 32);
    assert!(s.chars().all(|c| c.is_ascii_hexdigit()));
}
