use super::*;
use crate::{
    config::model::ImageConfig,
    paint::palette::{Palette, PaletteName},
    text::{fonts::FontBook, overlay::OverlayRenderer},
};

#[test]
fn over_transparent_dst_yields_src() {
    let dst = [0, 0, 0, 0];
    let src = [100, 50, 0, 128];
    assert_eq!(over(dst, src), src);
}

#[test]
fn over_src_alpha_0_is_noop() {
    let dst = [10, 20, 30, 255];
    let src = [0, 0, 0, 0];
    assert_eq!(over(dst, src), dst);
}

#[test]
fn over_src_opaque_replaces_dst() {
    let dst = [0, 0, 0, 255];
    let src = [255, 0, 0, 255];
    assert_eq!(over(dst, src), src);
}

#[test]
fn over_keeps_an_opaque_destination_opaque() {
    let dst = [200, 100, 50, 255];
    // 75% white, premultiplied
    let src = [191, 191, 191, 191];
    let out = over(dst, src);
    assert_eq!(out[3], 255);
    assert_eq!(out[0], 191 + 50);
    assert_eq!(out[2], 191 + 13);
}

#[test]
fn over_in_place_rejects_mismatched_buffers() {
    let mut dst = vec![0u8; 8];
    assert!(over_in_place(&mut dst, &[0u8; 4]).is_err());
    assert!(over_in_place(&mut dst[..6], &[0u8; 6]).is_err());
}

#[test]
fn compose_keeps_canvas_where_overlay_is_transparent() {
    let palette = Palette::get(PaletteName::Ocean);
    let mut canvas = Canvas::new();
    canvas.fill(palette.background);
    let overlay = OverlayRenderer::new(&FontBook::empty())
        .render(&ImageConfig::titled("Title"), palette)
        .unwrap();

    let frame = compose(&canvas, &overlay).unwrap();
    assert_eq!((frame.width(), frame.height()), (WIDTH, HEIGHT));
    assert_eq!(frame.pixel(WIDTH - 1, 0), Some(palette.background));
    assert!(frame.data().chunks_exact(4).all(|px| px[3] == 255));

    let m = overlay.layout.marker.center;
    assert_eq!(frame.pixel(m.x as u32, m.y as u32), Some(palette.accent[0]));
}

#[test]
fn compose_rejects_wrong_canvas_size() {
    let canvas = Canvas::with_size(10, 10);
    let overlay = OverlayRenderer::new(&FontBook::empty())
        .render(&ImageConfig::titled("Title"), Palette::get(PaletteName::Brand))
        .unwrap();
    assert!(compose(&canvas, &overlay).is_err());
}

#[test]
fn frame_fingerprint_tracks_content() {
    let a = Frame {
        width: 2,
        height: 1,
        data: vec![1, 2, 3, 255, 4, 5, 6, 255],
    };
    let mut b = a.clone();
    assert_eq!(a.fingerprint(), b.fingerprint());
    b.data[0] = 9;
    assert_ne!(a.fingerprint(), b.fingerprint());
}
