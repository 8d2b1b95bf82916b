//! Stateless draw-call descriptions.
//!
//! Recipes describe a sprite as an ordered list of primitives; the canvas
//! applies them in order, so each primitive paints over everything before it.

use super::{Colour, Point, Rect};

/// Outline colour and width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stroke {
    pub colour: Colour,
    pub width: u32,
}

impl Stroke {
    pub const fn new(colour: Colour, width: u32) -> Self {
        Self { colour, width }
    }

    /// Black outline of the given width.
    pub const fn black(width: u32) -> Self {
        Self::new(Colour::BLACK, width)
    }
}

/// Gradient direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// One colour per row, interpolated top to bottom.
    Vertical,
    /// One colour per column, interpolated left to right.
    Horizontal,
}

/// A single draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Ellipse {
        bbox: Rect,
        fill: Option<Colour>,
        outline: Option<Stroke>,
    },
    Polygon {
        points: Vec<Point>,
        fill: Colour,
        outline: Option<Stroke>,
    },
    Rectangle {
        rect: Rect,
        fill: Option<Colour>,
        outline: Option<Stroke>,
    },
    Line {
        points: Vec<Point>,
        stroke: Stroke,
    },
    Arc {
        bbox: Rect,
        start_deg: f32,
        end_deg: f32,
        stroke: Stroke,
    },
    Gradient {
        rect: Rect,
        from: Colour,
        to: Colour,
        axis: Axis,
    },
    Text {
        text: String,
        origin: Point,
        size: f32,
        fill: Colour,
    },
}

impl Primitive {
    pub fn ellipse(bbox: Rect, fill: Colour, outline: Option<Stroke>) -> Self {
        Primitive::Ellipse {
            bbox,
            fill: Some(fill),
            outline,
        }
    }

    pub fn rect(rect: Rect, fill: Colour, outline: Option<Stroke>) -> Self {
        Primitive::Rectangle {
            rect,
            fill: Some(fill),
            outline,
        }
    }

    pub fn polygon(points: impl IntoIterator<Item = (i32, i32)>, fill: Colour) -> Self {
        Primitive::Polygon {
            points: points.into_iter().map(Point::from).collect(),
            fill,
            outline: None,
        }
    }

    pub fn line(points: impl IntoIterator<Item = (i32, i32)>, colour: Colour, width: u32) -> Self {
        Primitive::Line {
            points: points.into_iter().map(Point::from).collect(),
            stroke: Stroke::new(colour, width),
        }
    }

    /// Short name used in diagnostics and tests.
    pub fn kind(&self) -> &'static str {
        match self {
            Primitive::Ellipse { .. } => "ellipse",
            Primitive::Polygon { .. } => "polygon",
            Primitive::Rectangle { .. } => "rectangle",
            Primitive::Line { .. } => "line",
            Primitive::Arc { .. } => "arc",
            Primitive::Gradient { .. } => "gradient",
            Primitive::Text { .. } => "text",
        }
    }
}
