use card_stack::ScrollState;
use virtualizer::Virtualizer;

use crate::StackKey;

/// Reads the lazy-list style scroll position off a virtualizer: the item under the leading
/// edge and how far (px) it has scrolled past it.
///
/// Offsets inside the spacing after an item belong to that item. Returns the default state
/// when the list is empty.
pub fn capture_scroll_state<K: StackKey>(v: &Virtualizer<K>) -> ScrollState {
    let offset = v.scroll_offset();
    let Some(index) = v.index_at_offset(offset) else {
        return ScrollState::default();
    };
    let start = v.item_start(index).unwrap_or(0);
    ScrollState::new(index, offset.saturating_sub(start) as f32)
}

/// Scrolls so that `state.first_visible_index` sits at the leading edge, offset by
/// `state.first_visible_offset` (limited to that item's extent, clamped to the scroll range).
///
/// Returns the applied offset.
pub fn apply_scroll_state<K: StackKey>(v: &mut Virtualizer<K>, state: ScrollState) -> u64 {
    let count = v.count();
    if count == 0 {
        v.set_scroll_offset(0);
        return 0;
    }
    let index = state.first_visible_index.min(count - 1);
    let start = v.item_start(index).unwrap_or(0);
    let mut extent = v.item_size(index).unwrap_or(0) as u64;
    if index + 1 < count {
        extent = extent.saturating_add(v.options().gap as u64);
    }
    let within = if state.first_visible_offset.is_nan() {
        0
    } else {
        (state.first_visible_offset.max(0.0).round() as u64).min(extent)
    };
    v.set_scroll_offset_clamped(start.saturating_add(within));
    v.scroll_offset()
}
