/// Per-item main-axis size, known only after the item's first layout pass.
///
/// An item starts `Unmeasured` and moves to `Measured` once the host reports its size.
/// `Unmeasured` items always have a stack depth of zero, so the first frame an item is laid
/// out it renders without any stacking effect. That one-frame lag is part of the visual
/// contract and must not be optimized away.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemGeometry {
    #[default]
    Unmeasured,
    Measured(f32),
}

impl ItemGeometry {
    /// Sizes that are not finite and strictly positive stay `Unmeasured`.
    pub fn from_size(size: f32) -> Self {
        if size.is_finite() && size > 0.0 {
            Self::Measured(size)
        } else {
            Self::Unmeasured
        }
    }

    pub fn is_measured(&self) -> bool {
        matches!(self, Self::Measured(_))
    }

    /// The measured size, or `0.0` before the first measurement.
    pub fn main_axis_size(&self) -> f32 {
        match *self {
            Self::Unmeasured => 0.0,
            Self::Measured(size) => size,
        }
    }

    /// Records a post-layout measurement. Returns `true` when the stored size changed.
    pub fn record(&mut self, size: f32) -> bool {
        let next = Self::from_size(size);
        if next.main_axis_size().to_bits() == self.main_axis_size().to_bits()
            && next.is_measured() == self.is_measured()
        {
            return false;
        }
        *self = next;
        true
    }
}
