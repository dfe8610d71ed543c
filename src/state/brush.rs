// Brush settings shared with the raw canvas listeners.
use crate::model::{BACKGROUND_COLOR, Tool};

#[cfg(test)]
#[path = "brush_test.rs"]
mod brush_test;

#[derive(Debug, Clone, PartialEq)]
pub struct Brush {
    pub color: String,
    pub size: f64,
    pub tool: Tool,
}

impl Default for Brush {
    fn default() -> Self {
        Self {
            color: "#000000".to_string(),
            size: 5.0,
            tool: Tool::Pen,
        }
    }
}

impl Brush {
    /// Color a segment drawn right now should use; the eraser paints background.
    pub fn stroke_style(&self) -> &str {
        match self.tool {
            Tool::Pen => &self.color,
            Tool::Eraser => BACKGROUND_COLOR,
        }
    }
}
