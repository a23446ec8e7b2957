#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

#[cfg(feature = "std")]
pub(crate) type KeyedMap<K, V> = HashMap<K, V>;
#[cfg(not(feature = "std"))]
pub(crate) type KeyedMap<K, V> = BTreeMap<K, V>;

/// Identity of a list item, stable across scrolling.
///
/// Per-item state (measured size, cached transform) is stored under this key.
#[cfg(feature = "std")]
pub trait StackKey: core::hash::Hash + Eq + Clone {}
#[cfg(feature = "std")]
impl<T: core::hash::Hash + Eq + Clone> StackKey for T {}

#[cfg(not(feature = "std"))]
pub trait StackKey: Ord + Clone {}
#[cfg(not(feature = "std"))]
impl<T: Ord + Clone> StackKey for T {}

/// Default key type: the item index.
pub type ItemKey = u64;
