use crate::{LayerTransform, Orientation, StackInput};

/// The exact tuple a transform depends on, compared bitwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TransformKey {
    pub item_index: usize,
    pub offset_bits: u32,
    pub extent_bits: u32,
    pub factor_bits: [u32; 4],
    pub orientation: Orientation,
}

impl TransformKey {
    pub fn new(item_index: usize, offset: f32, extent: f32, input: &StackInput) -> Self {
        Self {
            item_index,
            offset_bits: offset.to_bits(),
            extent_bits: extent.to_bits(),
            factor_bits: input.factors.bits(),
            orientation: input.orientation,
        }
    }
}

/// A one-entry cache holding the last transform computed for an item.
///
/// Scroll events move every laid-out item's depth, but items after the first visible one
/// keep `offset == 0` and hit the cache on every frame.
#[derive(Clone, Debug, Default)]
pub struct TransformMemo {
    last: Option<(TransformKey, LayerTransform)>,
    hits: u64,
    misses: u64,
}

impl TransformMemo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached transform when the key tuple is unchanged, recomputing otherwise.
    pub fn get_or_compute(&mut self, input: &StackInput) -> LayerTransform {
        let offset = input.depth();
        let extent = input.extent();
        let key = TransformKey::new(input.item_index, offset, extent, input);
        if let Some((cached_key, cached)) = &self.last {
            if *cached_key == key {
                self.hits = self.hits.saturating_add(1);
                return *cached;
            }
        }

        strace!(item_index = input.item_index, offset, extent, "recompute transform");
        let transform =
            LayerTransform::from_depth(offset, extent, &input.factors, input.orientation);
        self.last = Some((key, transform));
        self.misses = self.misses.saturating_add(1);
        transform
    }

    /// The last computed transform, if any.
    pub fn last(&self) -> Option<LayerTransform> {
        self.last.map(|(_, t)| t)
    }

    pub fn invalidate(&mut self) {
        self.last = None;
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}
