use super::*;

#[test]
fn defaults_to_black_pen_size_five() {
    let b = Brush::default();
    assert_eq!(b.color, "#000000");
    assert_eq!(b.size, 5.0);
    assert_eq!(b.tool, Tool::Pen);
}

#[test]
fn pen_strokes_with_brush_color() {
    let b = Brush {
        color: "#ff0000".to_string(),
        ..Brush::default()
    };
    assert_eq!(b.stroke_style(), "#ff0000");
}

#[test]
fn eraser_strokes_with_background_color() {
    let b = Brush {
        color: "#ff0000".to_string(),
        tool: Tool::Eraser,
        ..Brush::default()
    };
    assert_eq!(b.stroke_style(), BACKGROUND_COLOR);
}
