/// Scroll axis of a list. Chosen once per list instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// A column: the main axis is Y.
    #[default]
    Vertical,
    /// A row: the main axis is X.
    Horizontal,
}

impl Orientation {
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Vertical)
    }

    pub fn flipped(self) -> Self {
        match self {
            Self::Vertical => Self::Horizontal,
            Self::Horizontal => Self::Vertical,
        }
    }

    /// Routes a main-axis scalar onto `(x, y)`, leaving the cross axis at zero.
    pub fn main_to_xy(self, main: f32) -> (f32, f32) {
        match self {
            Self::Vertical => (0.0, main),
            Self::Horizontal => (main, 0.0),
        }
    }

    /// Builds a rect from main/cross-axis coordinates.
    pub fn rect(
        self,
        main_start: f32,
        cross_start: f32,
        main_size: f32,
        cross_size: f32,
    ) -> LayerRect {
        match self {
            Self::Vertical => LayerRect::new(cross_start, main_start, cross_size, main_size),
            Self::Horizontal => LayerRect::new(main_start, cross_start, main_size, cross_size),
        }
    }
}

/// The host list's scroll position, expressed the way lazy lists report it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    /// Index of the first item crossing the viewport's leading edge.
    pub first_visible_index: usize,
    /// How far (px) that item has scrolled past the leading edge. Non-negative.
    pub first_visible_offset: f32,
}

impl ScrollState {
    pub const fn new(first_visible_index: usize, first_visible_offset: f32) -> Self {
        Self {
            first_visible_index,
            first_visible_offset,
        }
    }
}

/// An axis-aligned rectangle in viewport pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayerRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl LayerRect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}
