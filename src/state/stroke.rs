// Active-stroke flag, mirroring the mouse button between raw listeners.
#[derive(Default, Debug, Clone)]
pub struct StrokeState {
    pub active: bool,
}

#[cfg(test)]
#[path = "stroke_test.rs"]
mod stroke_test;
