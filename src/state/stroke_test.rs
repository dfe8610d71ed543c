use super::*;

#[test]
fn no_stroke_active_by_default() {
    assert!(!StrokeState::default().active);
}
