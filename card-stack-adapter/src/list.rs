use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cell::Cell;
use core::ops::Range;

use card_stack::{
    AnimationFactors, ItemGeometry, LayerRect, LayerTransform, Orientation, ScrollState,
    ShadowOverlay, ShadowShape, StackInput, TransformMemo,
};
use virtualizer::Virtualizer;

use crate::key::{KeyedMap, StackKey};
use crate::scroll::{apply_scroll_state, capture_scroll_state};
use crate::{ItemKey, OnChangeCallback, Rect, StackedListOptions};

/// Per-item arena entry. Lives while the item is laid out; evicted when the item leaves the
/// laid-out range, so a returning item starts `Unmeasured` again.
#[derive(Clone, Debug, Default)]
struct ItemSlot {
    geometry: ItemGeometry,
    memo: TransformMemo,
    frame: u64,
}

/// One laid-out item, ready for the host to draw.
#[derive(Clone, Debug, PartialEq)]
pub struct StackedItem<K = ItemKey> {
    pub index: usize,
    pub key: K,
    /// Untransformed layout rect in viewport coordinates; the cross axis fills the viewport.
    pub bounds: LayerRect,
    pub geometry: ItemGeometry,
    pub transform: LayerTransform,
    /// Drawn after the item's own content.
    pub shadow: Option<ShadowOverlay>,
}

impl<K> StackedItem<K> {
    /// Where the item's visual layer ends up after the transform.
    pub fn visual_bounds(&self) -> LayerRect {
        self.transform.apply(self.bounds)
    }
}

/// Aggregated transform cache counters over the live slots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemoStats {
    pub hits: u64,
    pub misses: u64,
}

/// A headless stacking card list.
///
/// This type does not hold any UI objects. Adapters drive it by:
/// - reporting viewport geometry and scroll offsets (`set_viewport`, `on_scroll`)
/// - running a frame pass (`for_each_stacked_item`) and applying each returned transform to
///   the item's visual layer
/// - reporting post-layout sizes (`on_item_measured`), which take effect on the next frame
///
/// Layout (sizes, spacing, offsets, ranges) lives in a [`Virtualizer`] and is kept in integer
/// pixels. Item layers are owned by the host and may be recycled freely; state is keyed by
/// item key, never by layer.
#[derive(Clone)]
pub struct StackedList<K = ItemKey> {
    v: Virtualizer<K>,
    factors: AnimationFactors,
    orientation: Orientation,
    shadow_shape: ShadowShape,
    on_change: Option<OnChangeCallback<K>>,
    slots: KeyedMap<K, ItemSlot>,
    laid_out: Range<usize>,
    frame: u64,
    needs_layout: bool,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl<K: StackKey + 'static> StackedList<K> {
    pub fn new(options: StackedListOptions<K>) -> Self {
        let mut v = Virtualizer::new(options.virtualizer_options());
        let offset = v.scroll_offset();
        v.set_scroll_offset_clamped(offset);
        sdebug!(
            count = options.count,
            overscan = options.overscan,
            vertical = options.orientation.is_vertical(),
            "StackedList::new"
        );
        Self {
            v,
            factors: options.factors,
            orientation: options.orientation,
            shadow_shape: options.shadow_shape,
            on_change: options.on_change,
            slots: KeyedMap::new(),
            laid_out: 0..0,
            frame: 0,
            needs_layout: true,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        }
    }

    /// The layout engine. Mutations go through `StackedList` so per-item state stays in sync.
    pub fn virtualizer(&self) -> &Virtualizer<K> {
        &self.v
    }

    pub fn count(&self) -> usize {
        self.v.count()
    }

    pub fn factors(&self) -> &AnimationFactors {
        &self.factors
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn spacing(&self) -> u32 {
        self.v.options().gap
    }

    pub fn overscan(&self) -> usize {
        self.v.options().overscan
    }

    pub fn shadow_shape(&self) -> ShadowShape {
        self.shadow_shape
    }

    pub fn key_for(&self, index: usize) -> K {
        self.v.key_for(index)
    }

    /// Whether anything changed since the last frame pass.
    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    fn mark_dirty(&mut self) {
        self.needs_layout = true;
        self.notify();
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.on_change {
            cb(self);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&StackedList<K>) + Send + Sync + 'static>,
    ) {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
    }

    pub fn viewport(&self) -> Rect {
        self.v.scroll_rect()
    }

    /// Updates the viewport and re-clamps the scroll offset to the new range.
    pub fn set_viewport(&mut self, rect: Rect) {
        if self.v.scroll_rect() == rect {
            return;
        }
        strace!(main = rect.main, cross = rect.cross, "set_viewport");
        self.v.batch_update(|v| {
            v.set_scroll_rect(rect);
            let offset = v.scroll_offset();
            v.set_scroll_offset_clamped(offset);
        });
        self.mark_dirty();
    }

    pub fn scroll_offset(&self) -> u64 {
        self.v.scroll_offset()
    }

    pub fn max_scroll_offset(&self) -> u64 {
        self.v.max_scroll_offset()
    }

    pub fn total_size(&self) -> u64 {
        self.v.total_size()
    }

    /// The first visible item and how far it has scrolled past the leading edge.
    pub fn scroll_state(&self) -> ScrollState {
        capture_scroll_state(&self.v)
    }

    /// Applies an absolute scroll offset reported by the host (clamped). Returns the applied
    /// offset.
    pub fn on_scroll(&mut self, offset: u64) -> u64 {
        let before = self.v.scroll_offset();
        self.v.set_scroll_offset_clamped(offset);
        let applied = self.v.scroll_offset();
        if applied != before {
            strace!(offset = applied, "on_scroll");
            self.mark_dirty();
        }
        applied
    }

    /// Scrolls by a delta and returns the consumed part.
    pub fn scroll_by(&mut self, delta: i64) -> i64 {
        let before = self.v.scroll_offset();
        let target = if delta < 0 {
            before.saturating_sub(delta.unsigned_abs())
        } else {
            before.saturating_add(delta as u64)
        };
        let applied = self.on_scroll(target);
        applied as i64 - before as i64
    }

    /// Moves `index` to the leading edge (clamped). Returns the applied offset.
    pub fn scroll_to_index(&mut self, index: usize) -> u64 {
        let offset = self.v.scroll_to_index_offset(index, virtualizer::Align::Start);
        self.on_scroll(offset)
    }

    /// Scrolls to a previously captured [`ScrollState`]. Returns the applied offset.
    pub fn restore_scroll_state(&mut self, state: ScrollState) -> u64 {
        let before = self.v.scroll_offset();
        let applied = apply_scroll_state(&mut self.v, state);
        if applied != before {
            self.mark_dirty();
        }
        applied
    }

    /// Replaces the animation factors. Transforms are recomputed on the next frame.
    pub fn set_factors(&mut self, factors: AnimationFactors) {
        if factors.bits() == self.factors.bits() {
            return;
        }
        sdebug!(
            scale = factors.scale_factor,
            translation = factors.translation_factor,
            alpha = factors.alpha_factor,
            shadow_alpha = factors.shadow_alpha_factor,
            "set_factors"
        );
        self.factors = factors;
        self.mark_dirty();
    }

    /// Switches the scroll axis.
    ///
    /// Every measurement was taken along the old main axis, so all items go back to
    /// `Unmeasured` and layout sizes return to their estimates. The first visible index is kept.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        if self.orientation == orientation {
            return;
        }
        sdebug!(vertical = orientation.is_vertical(), "set_orientation");
        self.orientation = orientation;
        self.slots.clear();
        let anchor = capture_scroll_state(&self.v);
        self.v.batch_update(|v| {
            v.reset_measurements();
            apply_scroll_state(v, ScrollState::new(anchor.first_visible_index, 0.0));
        });
        self.mark_dirty();
    }

    /// Changes the spacing between items, keeping the first visible item and its offset.
    pub fn set_spacing(&mut self, spacing: u32) {
        if self.v.options().gap == spacing {
            return;
        }
        let anchor = capture_scroll_state(&self.v);
        self.v.batch_update(|v| {
            v.set_gap(spacing);
            apply_scroll_state(v, anchor);
        });
        self.mark_dirty();
    }

    pub fn set_count(&mut self, count: usize) {
        if self.v.count() == count {
            return;
        }
        sdebug!(count, "set_count");
        self.v.batch_update(|v| {
            v.set_count(count);
            let offset = v.scroll_offset();
            v.set_scroll_offset_clamped(offset);
        });
        self.mark_dirty();
    }

    pub fn set_overscan(&mut self, overscan: usize) {
        if self.v.options().overscan == overscan {
            return;
        }
        self.v.set_overscan(overscan);
        self.mark_dirty();
    }

    /// Indexes of the items intersecting the viewport.
    pub fn visible_range(&self) -> Range<usize> {
        let r = self.v.visible_range();
        r.start_index..r.end_index
    }

    /// Indexes the next frame pass will lay out: the visible items plus `overscan` on each
    /// side.
    pub fn laid_out_range(&self) -> Range<usize> {
        let r = self.v.virtual_range();
        r.start_index..r.end_index
    }

    /// Runs one frame pass: computes the transform of every laid-out item and hands it to
    /// the per-item renderer `f`, in index order.
    ///
    /// Slots for items that are no longer laid out are evicted afterwards.
    pub fn for_each_stacked_item(&mut self, mut f: impl FnMut(StackedItem<K>)) {
        self.frame = self.frame.wrapping_add(1);
        let frame = self.frame;
        let state = capture_scroll_state(&self.v);
        let offset = self.v.scroll_offset();
        let cross = self.v.scroll_rect().cross as f32;
        let spacing = self.v.options().gap as f32;
        let factors = self.factors;
        let orientation = self.orientation;
        let shape = self.shadow_shape;

        let v = &self.v;
        let slots = &mut self.slots;
        let mut range: Option<Range<usize>> = None;
        v.for_each_virtual_item(|item| {
            let r = range.get_or_insert(item.index..item.index);
            r.end = item.index + 1;

            let key = v.key_for(item.index);
            let slot = slots.entry(key.clone()).or_default();
            slot.frame = frame;

            let input =
                StackInput::new(item.index, state, slot.geometry, spacing, factors, orientation);
            let transform = slot.memo.get_or_compute(&input);

            let start = item.start as i64 - offset as i64;
            f(StackedItem {
                index: item.index,
                key,
                bounds: orientation.rect(start as f32, 0.0, item.size as f32, cross),
                geometry: slot.geometry,
                transform,
                shadow: transform.shadow_overlay(shape),
            });
        });

        let before = self.slots.len();
        self.slots.retain(|_, slot| slot.frame == frame);
        let evicted = before - self.slots.len();
        if evicted > 0 {
            strace!(evicted, "evicted item slots");
        }

        self.laid_out = range.unwrap_or(0..0);
        self.needs_layout = false;
    }

    /// Collects one frame pass into `out` (clears `out` first).
    pub fn collect_stacked_items(&mut self, out: &mut Vec<StackedItem<K>>) {
        out.clear();
        self.for_each_stacked_item(|item| out.push(item));
    }

    /// Records the post-layout main-axis size (px) of an item laid out by the last frame pass.
    ///
    /// The size is used from the next frame pass on. Returns `true` when the item's geometry
    /// changed. Reports for items outside the last laid-out range are ignored.
    pub fn on_item_measured(&mut self, index: usize, size: u32) -> bool {
        if !self.laid_out.contains(&index) {
            swarn!(index, size, "measurement for an item that is not laid out");
            return false;
        }
        let key = self.key_for(index);
        let Some(slot) = self.slots.get_mut(&key) else {
            swarn!(index, "measurement for an evicted item");
            return false;
        };
        let changed = slot.geometry.record(size as f32);
        let resized = slot.geometry.is_measured() && self.v.item_size(index) != Some(size);
        if resized {
            self.v.resize_item(index, size);
        }
        if changed || resized {
            strace!(index, size, "on_item_measured");
            self.mark_dirty();
        }
        changed
    }

    /// The item's current geometry; `Unmeasured` when it has no slot.
    pub fn geometry(&self, index: usize) -> ItemGeometry {
        if index >= self.count() {
            return ItemGeometry::Unmeasured;
        }
        self.slots
            .get(&self.key_for(index))
            .map(|slot| slot.geometry)
            .unwrap_or_default()
    }

    pub fn is_measured(&self, index: usize) -> bool {
        self.geometry(index).is_measured()
    }

    /// Number of live per-item slots.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn memo_stats(&self) -> MemoStats {
        self.slots.values().fold(MemoStats::default(), |acc, slot| MemoStats {
            hits: acc.hits + slot.memo.hits(),
            misses: acc.misses + slot.memo.misses(),
        })
    }
}

impl<K: core::fmt::Debug> core::fmt::Debug for StackedList<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StackedList")
            .field("v", &self.v)
            .field("factors", &self.factors)
            .field("orientation", &self.orientation)
            .field("shadow_shape", &self.shadow_shape)
            .field("slots", &self.slots)
            .field("laid_out", &self.laid_out)
            .field("frame", &self.frame)
            .field("needs_layout", &self.needs_layout)
            .finish_non_exhaustive()
    }
}
