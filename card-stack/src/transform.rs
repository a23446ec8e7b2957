use crate::{AnimationFactors, ItemGeometry, LayerRect, Orientation, ScrollState};

/// Everything one stacking computation reads.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StackInput {
    pub item_index: usize,
    pub scroll: ScrollState,
    /// Uniform spacing between items, constant per list.
    pub item_spacing: f32,
    /// The item's measured main-axis size, `0.0` while unmeasured.
    pub item_main_axis_size: f32,
    pub factors: AnimationFactors,
    pub orientation: Orientation,
}

impl StackInput {
    pub fn new(
        item_index: usize,
        scroll: ScrollState,
        geometry: ItemGeometry,
        item_spacing: f32,
        factors: AnimationFactors,
        orientation: Orientation,
    ) -> Self {
        Self {
            item_index,
            scroll,
            item_spacing,
            item_main_axis_size: geometry.main_axis_size(),
            factors,
            orientation,
        }
    }

    /// `size + spacing`: the distance one stack unit covers on the main axis.
    pub fn extent(&self) -> f32 {
        self.item_main_axis_size + self.item_spacing
    }

    pub fn depth(&self) -> f32 {
        stack_depth(
            self.item_index,
            self.scroll,
            self.item_main_axis_size,
            self.item_spacing,
        )
    }
}

/// Continuous count of item slots that have scrolled past the leading edge, measured from
/// `item_index`.
///
/// Items after the first visible one, and items whose size is still unknown, are pinned at
/// `0.0`.
pub fn stack_depth(
    item_index: usize,
    scroll: ScrollState,
    item_main_axis_size: f32,
    item_spacing: f32,
) -> f32 {
    if scroll.first_visible_index < item_index
        || item_main_axis_size.is_nan()
        || item_main_axis_size <= 0.0
    {
        return 0.0;
    }
    let passed = (scroll.first_visible_index - item_index) as f32;
    let ratio = scroll.first_visible_offset.max(0.0) / (item_main_axis_size + item_spacing);
    passed + ratio
}

/// Computes the visual transform for one item.
pub fn stack_transform(input: &StackInput) -> LayerTransform {
    LayerTransform::from_depth(input.depth(), input.extent(), &input.factors, input.orientation)
}

/// Visual-layer parameters for one item.
///
/// Scale is uniform on both axes around the layer center; translation is applied after
/// scaling. The shadow is a black overlay drawn over the item's own content.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayerTransform {
    /// Stack depth the transform was derived from.
    pub offset: f32,
    pub scale: f32,
    pub translate_x: f32,
    pub translate_y: f32,
    pub alpha: f32,
    pub shadow_alpha: f32,
}

impl LayerTransform {
    pub const IDENTITY: Self = Self {
        offset: 0.0,
        scale: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
        alpha: 1.0,
        shadow_alpha: 0.0,
    };

    /// Derives every parameter from a stack depth.
    ///
    /// `extent` is `size + spacing`. Scale is left unclamped and goes negative once
    /// `offset * scale_factor > 1`.
    pub fn from_depth(
        offset: f32,
        extent: f32,
        factors: &AnimationFactors,
        orientation: Orientation,
    ) -> Self {
        let scale = 1.0 - offset * factors.scale_factor;
        let translation = offset * extent * factors.translation_factor;
        let (translate_x, translate_y) = orientation.main_to_xy(translation);
        // The first unit of depth keeps the leading card fully opaque.
        let alpha = if offset < 1.0 {
            1.0
        } else {
            (1.0 - (offset - 1.0) * factors.alpha_factor).clamp(0.0, 1.0)
        };
        let shadow_alpha = (offset * factors.shadow_alpha_factor).clamp(0.0, 1.0);

        Self {
            offset,
            scale,
            translate_x,
            translate_y,
            alpha,
            shadow_alpha,
        }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    pub fn translation(&self) -> (f32, f32) {
        (self.translate_x, self.translate_y)
    }

    /// Whether the layer can be skipped entirely.
    pub fn is_invisible(&self) -> bool {
        self.alpha <= 0.0
    }

    /// The overlay to draw after the item's content, if any.
    pub fn shadow_overlay(&self, shape: ShadowShape) -> Option<ShadowOverlay> {
        (self.shadow_alpha > 0.0).then_some(ShadowOverlay {
            alpha: self.shadow_alpha,
            shape,
        })
    }

    /// Maps an untransformed layout rect to where the layer ends up on screen.
    pub fn apply(&self, rect: LayerRect) -> LayerRect {
        let (cx, cy) = rect.center();
        let width = rect.width * self.scale;
        let height = rect.height * self.scale;
        LayerRect {
            x: cx - width / 2.0 + self.translate_x,
            y: cy - height / 2.0 + self.translate_y,
            width,
            height,
        }
    }
}

impl Default for LayerTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// What the shadow overlay covers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShadowShape {
    /// A full-bleed rectangle over the item bounds.
    #[default]
    Bounds,
    /// The item's own outline (e.g. a rounded card shape), when the host has one.
    Outline,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShadowOverlay {
    pub alpha: f32,
    pub shape: ShadowShape,
}

impl ShadowOverlay {
    /// Black at `alpha`, as straight (non-premultiplied) RGBA.
    pub fn rgba(&self) -> [f32; 4] {
        [0.0, 0.0, 0.0, self.alpha]
    }

    pub fn rgba8(&self) -> [u8; 4] {
        let a = (self.alpha.clamp(0.0, 1.0) * 255.0 + 0.5) as u8;
        [0, 0, 0, a]
    }
}
