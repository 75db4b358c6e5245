//! Geometry primitives used by the layout pass.
//!
//! All coordinates are abstract layout units with the origin at the top
//! left. Hosts map them onto whatever they draw with (points, pixels,
//! terminal cells).

use serde::{Deserialize, Serialize};

/// Interface orientation reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Home edge at the bottom.
    Portrait,
    /// Home edge at the top.
    PortraitUpsideDown,
    /// Home edge on the left.
    #[default]
    LandscapeLeft,
    /// Home edge on the right.
    LandscapeRight,
}

impl Orientation {
    /// Whether this is one of the two landscape orientations.
    pub fn is_landscape(self) -> bool {
        matches!(self, Self::LandscapeLeft | Self::LandscapeRight)
    }

    /// Whether this is one of the two portrait orientations.
    pub fn is_portrait(self) -> bool {
        !self.is_landscape()
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Portrait => write!(f, "portrait"),
            Self::PortraitUpsideDown => write!(f, "portrait-upside-down"),
            Self::LandscapeLeft => write!(f, "landscape-left"),
            Self::LandscapeRight => write!(f, "landscape-right"),
        }
    }
}

/// A width/height pair in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Size {
    /// Horizontal extent.
    pub width: u16,
    /// Vertical extent.
    pub height: u16,
}

impl Size {
    /// A new size.
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// The same size with width and height swapped.
    #[must_use]
    pub const fn transposed(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }
}

/// An axis-aligned rectangle in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Rect {
    /// Left edge.
    pub x: u16,
    /// Top edge.
    pub y: u16,
    /// Horizontal extent.
    pub width: u16,
    /// Vertical extent.
    pub height: u16,
}

impl Rect {
    /// A new rectangle.
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A rectangle at the origin covering `size`.
    pub const fn from_size(size: Size) -> Self {
        Self::new(0, 0, size.width, size.height)
    }

    /// The size of this rectangle.
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// One past the right edge.
    pub const fn right(&self) -> u16 {
        self.x + self.width
    }

    /// One past the bottom edge.
    pub const fn bottom(&self) -> u16 {
        self.y + self.height
    }
}

/// A controller-owned layout box that hosts externally supplied content.
///
/// Containers are outputs of the layout pass: the controller positions and
/// shows or hides them, and hosts draw their content views inside the
/// reported frames. Hidden containers keep their last frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Container {
    frame: Rect,
    corner_radius: f32,
    visible: bool,
}

impl Container {
    pub(crate) fn new() -> Self {
        Self {
            frame: Rect::default(),
            corner_radius: 0.0,
            visible: false,
        }
    }

    /// The frame assigned by the last layout pass.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Corner rounding applied to this container, in layout units.
    pub fn corner_radius(&self) -> f32 {
        self.corner_radius
    }

    /// Whether the container is on screen.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub(crate) fn place(&mut self, frame: Rect, corner_radius: f32) {
        self.frame = frame;
        self.corner_radius = corner_radius;
        self.visible = true;
    }

    pub(crate) fn hide(&mut self) {
        self.visible = false;
    }
}
