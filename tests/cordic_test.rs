use tui_torus::core::cordic::CORDIC_ITERATIONS;
use tui_torus::core::{approx_length, Cordic, LengthEstimator};

/// 5/8 over-corrects the CORDIC gain by ~3%; truncation adds a little more.
const MAX_RELATIVE_ERROR: f64 = 0.04;

fn relative_error(estimate: i32, x: i32, y: i32) -> f64 {
    let exact = ((x as f64).powi(2) + (y as f64).powi(2)).sqrt();
    ((estimate as f64) - exact).abs() / exact
}

#[test]
fn cordic_known_vectors() {
    let mut c = 0;
    let len = approx_length(300, 0, &mut c, 0);
    assert!(relative_error(len, 300, 0) <= MAX_RELATIVE_ERROR, "{}", len);

    let len = approx_length(300, 300, &mut c, 0);
    assert!(relative_error(len, 300, 300) <= MAX_RELATIVE_ERROR, "{}", len);
    assert!((len - 424).abs() <= 16, "{}", len);
}

#[test]
fn cordic_length_error_is_bounded_over_a_grid() {
    let engine = Cordic::default();
    for x in (-2000..=2000).step_by(37) {
        for y in (-2000..=2000).step_by(41) {
            if x * x + y * y < 256 * 256 {
                continue;
            }
            let mut c = 0;
            let len = engine.approx_length(x, y, &mut c, 0);
            assert!(
                relative_error(len, x, y) <= MAX_RELATIVE_ERROR,
                "({}, {}) -> {}",
                x,
                y,
                len
            );
        }
    }
}

#[test]
fn companion_follows_the_primary_rotation() {
    for &(x, y) in &[(300, 300), (1000, -250), (64, 900), (700, 1)] {
        let v = Cordic::default().vectorize(x, y, x, y);
        assert!((v.companion_x - v.length).abs() <= 1, "{:?}", v);
        assert!(v.residual.abs() <= 16, "{:?}", v);
        assert!(v.companion_y.abs() <= 16, "{:?}", v);
    }
}

#[test]
fn companion_perpendicular_to_primary_ends_on_y_axis() {
    // (x, y) = (0, 500) is rotated by -90°; a companion along +x lands on -y.
    let v = Cordic::default().vectorize(0, 500, 400, 0);
    assert!(v.companion_x.abs() <= 16, "{:?}", v);
    assert!(v.companion_y < -550, "{:?}", v);
}

#[test]
fn approx_length_writes_companion_in_place() {
    let mut companion = 300;
    let len = approx_length(300, 300, &mut companion, 300);
    assert_eq!(companion, len);
}

#[test]
fn more_iterations_do_not_hurt() {
    assert_eq!(CORDIC_ITERATIONS, 8);
    let coarse = Cordic::new(4).vectorize(1000, 700, 0, 0);
    let fine = Cordic::new(12).vectorize(1000, 700, 0, 0);
    assert!(fine.residual.abs() <= coarse.residual.abs());
    assert!(relative_error(fine.length, 1000, 700) <= MAX_RELATIVE_ERROR);
}
