use super::Canvas;

/// A finished canvas paired with its logical identifier.
///
/// Sprites are immutable once produced; the exporter and composer only
/// read them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    name: String,
    canvas: Canvas,
}

impl Sprite {
    pub fn new(name: impl Into<String>, canvas: Canvas) -> Self {
        Self {
            name: name.into(),
            canvas,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn width(&self) -> u32 {
        self.canvas.width()
    }

    pub fn height(&self) -> u32 {
        self.canvas.height()
    }

    /// Give up the identifier and return the pixels.
    pub fn into_canvas(self) -> Canvas {
        self.canvas
    }
}
