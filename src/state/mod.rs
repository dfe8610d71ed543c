pub mod brush;
pub mod stroke;

pub use brush::Brush;
pub use stroke::StrokeState;
