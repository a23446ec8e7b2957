//! Headless stacking card list for the `card-stack` crate.
//!
//! The `card-stack` crate computes one item's transform from a scroll position. This crate
//! provides the list-level pieces an adapter needs around it:
//!
//! - Conversions between a `virtualizer::Virtualizer` scroll offset and the first visible
//!   item plus its offset, which is what the stacking transform consumes
//! - A stacked list that measures items, caches per-item transforms, and evicts state for
//!   items that scroll away
//! - A stateless settings panel and a small composition root wiring it to the list
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod cards;
mod key;
mod list;
mod options;
mod scroll;
mod settings;


pub use cards::StackedCards;
pub use key::{ItemKey, StackKey};
pub use list::{MemoStats, StackedItem, StackedList};
pub use options::{DEFAULT_SPACING, OnChangeCallback, StackedListOptions};
pub use scroll::{apply_scroll_state, capture_scroll_state};
pub use settings::{FactorSlider, SettingsPanel, factor_description, factor_label};

pub use card_stack;
pub use virtualizer;
pub use virtualizer::Rect;
