use alloc::sync::Arc;

use card_stack::{AnimationFactors, Orientation, ShadowShape};

use crate::list::StackedList;
use crate::{ItemKey, Rect, StackKey};
use virtualizer::VirtualizerOptions;

/// A callback fired after the list's state changed (scroll, settings, measurement).
pub type OnChangeCallback<K> = Arc<dyn Fn(&StackedList<K>) + Send + Sync>;

/// Configuration for [`StackedList`].
///
/// Cheap to clone: closures are stored in `Arc`s.
pub struct StackedListOptions<K = ItemKey> {
    pub count: usize,
    /// Main-axis size (px) used for layout until an item is measured.
    pub estimate_size: Arc<dyn Fn(usize) -> u32 + Send + Sync>,
    pub get_item_key: Arc<dyn Fn(usize) -> K + Send + Sync>,
    /// Space between adjacent items, in pixels.
    pub spacing: u32,
    pub orientation: Orientation,
    pub factors: AnimationFactors,
    /// Extra items laid out beyond each end of the viewport.
    ///
    /// The ones before the first visible item render as the stacked cards behind it.
    pub overscan: usize,
    pub shadow_shape: ShadowShape,
    pub initial_rect: Option<Rect>,
    pub initial_offset: u64,
    pub on_change: Option<OnChangeCallback<K>>,
}

impl<K> Clone for StackedListOptions<K> {
    fn clone(&self) -> Self {
        Self {
            count: self.count,
            estimate_size: Arc::clone(&self.estimate_size),
            get_item_key: Arc::clone(&self.get_item_key),
            spacing: self.spacing,
            orientation: self.orientation,
            factors: self.factors,
            overscan: self.overscan,
            shadow_shape: self.shadow_shape,
            initial_rect: self.initial_rect,
            initial_offset: self.initial_offset,
            on_change: self.on_change.clone(),
        }
    }
}

/// Default space between adjacent items, in pixels.
pub const DEFAULT_SPACING: u32 = 8;

impl StackedListOptions<ItemKey> {
    /// Creates options for a list keyed by index.
    pub fn new(count: usize, estimate_size: impl Fn(usize) -> u32 + Send + Sync + 'static) -> Self {
        Self::new_with_key(count, estimate_size, |i| i as u64)
    }
}

impl<K> StackedListOptions<K> {
    /// Creates options with a custom key mapping.
    ///
    /// Use this for an externally supplied item sequence: `get_item_key(i)` should return a
    /// stable identity for the item at index `i`.
    pub fn new_with_key(
        count: usize,
        estimate_size: impl Fn(usize) -> u32 + Send + Sync + 'static,
        get_item_key: impl Fn(usize) -> K + Send + Sync + 'static,
    ) -> Self {
        Self {
            count,
            estimate_size: Arc::new(estimate_size),
            get_item_key: Arc::new(get_item_key),
            spacing: DEFAULT_SPACING,
            orientation: Orientation::Vertical,
            factors: AnimationFactors::default(),
            overscan: 1,
            shadow_shape: ShadowShape::Bounds,
            initial_rect: None,
            initial_offset: 0,
            on_change: None,
        }
    }

    pub fn with_get_item_key(
        mut self,
        get_item_key: impl Fn(usize) -> K + Send + Sync + 'static,
    ) -> Self {
        self.get_item_key = Arc::new(get_item_key);
        self
    }

    pub fn with_spacing(mut self, spacing: u32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_factors(mut self, factors: AnimationFactors) -> Self {
        self.factors = factors;
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_shadow_shape(mut self, shadow_shape: ShadowShape) -> Self {
        self.shadow_shape = shadow_shape;
        self
    }

    pub fn with_initial_rect(mut self, initial_rect: Option<Rect>) -> Self {
        self.initial_rect = initial_rect;
        self
    }

    pub fn with_initial_offset(mut self, initial_offset: u64) -> Self {
        self.initial_offset = initial_offset;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&StackedList<K>) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl<K: StackKey + 'static> StackedListOptions<K> {
    /// Layout options for the underlying virtualizer.
    ///
    /// Measured items before the leading edge shift the scroll offset by their size change, so
    /// the first visible item stays put.
    pub fn virtualizer_options(&self) -> VirtualizerOptions<K> {
        let estimate_size = Arc::clone(&self.estimate_size);
        let get_item_key = Arc::clone(&self.get_item_key);
        VirtualizerOptions::new_with_key(
            self.count,
            move |i| estimate_size(i),
            move |i| get_item_key(i),
        )
        .with_gap(self.spacing)
        .with_overscan(self.overscan)
        .with_initial_rect(self.initial_rect)
        .with_initial_offset_value(self.initial_offset)
        .with_should_adjust_scroll_position_on_item_size_change(Some(
            |v: &virtualizer::Virtualizer<K>, item: virtualizer::VirtualItem, _delta: i64| {
                item.end() <= v.scroll_offset()
            },
        ))
    }
}

impl<K> core::fmt::Debug for StackedListOptions<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StackedListOptions")
            .field("count", &self.count)
            .field("spacing", &self.spacing)
            .field("orientation", &self.orientation)
            .field("factors", &self.factors)
            .field("overscan", &self.overscan)
            .field("shadow_shape", &self.shadow_shape)
            .field("initial_rect", &self.initial_rect)
            .field("initial_offset", &self.initial_offset)
            .finish_non_exhaustive()
    }
}
