use super::*;

fn stroke(from: (f64, f64), to: (f64, f64), width: f64) -> BrushStroke {
    BrushStroke {
        from: Point::new(from.0, from.1),
        to: Point::new(to.0, to.1),
        width,
        color: Rgb::new(0, 0, 0),
        alpha: 1.0,
    }
}

fn white(w: u32, h: u32) -> Canvas {
    let mut c = Canvas::with_size(w, h);
    c.fill(Rgb::new(255, 255, 255));
    c
}

#[test]
fn step_count_has_a_floor_of_ten() {
    assert_eq!(stroke((0.0, 0.0), (20.0, 0.0), 10.0).steps(), 10);
    assert_eq!(stroke((0.0, 0.0), (0.0, 800.0), 10.0).steps(), 100);
    assert_eq!(stroke((5.0, 5.0), (5.0, 5.0), 10.0).steps(), 10);
}

#[test]
fn stroke_is_thick_in_the_middle_and_thin_at_the_ends() {
    let mut c = white(200, 100);
    let mut s = NumberStream::new(11);
    trace_stroke(&mut c, &mut s, stroke((20.0, 50.0), (180.0, 50.0), 30.0));

    assert!(c.pixel(100, 50).unwrap().r < 128);
    assert!(c.pixel(100, 56).unwrap().r < 250);
    assert_eq!(c.pixel(30, 62).unwrap().r, 255);
    assert_eq!(c.pixel(5, 50).unwrap().r, 255);
    assert_eq!(c.pixel(195, 50).unwrap().r, 255);
}

#[test]
fn tracing_is_reproducible_for_a_seed() {
    let run = |seed| {
        let mut c = white(160, 120);
        let mut s = NumberStream::new(seed);
        trace_stroke(&mut c, &mut s, stroke((10.0, 10.0), (150.0, 110.0), 24.0));
        (c, s.drawn())
    };
    let (a, na) = run(5);
    let (b, nb) = run(5);
    let (other, _) = run(6);
    assert_eq!(a, b);
    assert_eq!(na, nb);
    assert_ne!(a, other);
}

#[test]
fn jitter_draws_two_values_per_step_before_stamping() {
    // A stroke entirely off-canvas stamps nothing, leaving only the jitter draws.
    let mut c = white(32, 32);
    let mut s = NumberStream::new(1);
    let st = stroke((-900.0, -900.0), (-700.0, -900.0), 10.0);
    trace_stroke(&mut c, &mut s, st);
    assert_eq!(s.drawn(), 2 * (st.steps() as u64 + 1));
}

#[test]
fn zero_length_stroke_still_paints_a_dot() {
    let mut c = white(64, 64);
    let mut s = NumberStream::new(2);
    trace_stroke(&mut c, &mut s, stroke((32.0, 32.0), (32.0, 32.0), 20.0));
    assert!(c.pixel(32, 32).unwrap().r < 255);
}
