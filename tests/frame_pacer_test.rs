use tui_torus::term::FramePacer;

#[test]
fn frame_pacer_renders_first_frame() {
    let mut p = FramePacer::new(33);
    assert_eq!(p.until_due_ms(0), 0);
    assert!(p.should_render(0));
}

#[test]
fn frame_pacer_waits_out_the_interval() {
    let mut p = FramePacer::new(33);
    assert!(p.should_render(0));
    assert!(!p.should_render(10));
    assert_eq!(p.until_due_ms(10), 23);
    assert!(!p.should_render(32));
    assert!(p.should_render(33));
    assert_eq!(p.until_due_ms(33), 33);
}

#[test]
fn frame_pacer_does_not_catch_up() {
    let mut p = FramePacer::new(33);
    assert!(p.should_render(0));
    assert!(p.should_render(500));
    assert!(!p.should_render(501));
    assert_eq!(p.until_due_ms(501), 32);
}

#[test]
fn frame_pacer_zero_interval_always_renders() {
    let mut p = FramePacer::new(0);
    assert!(p.should_render(0));
    assert!(p.should_render(0));
    assert!(p.should_render(1));
    assert_eq!(p.until_due_ms(1), 0);
}
