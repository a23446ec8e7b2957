//! Scroll-driven stacking transforms for card lists.
//!
//! As a list scrolls, cards passing behind its leading edge shrink, slide, fade, and grow a
//! drop shadow, which reads as a deck of cards. This crate holds the math only: a pure
//! function from scroll position and item geometry to a per-item [`LayerTransform`].
//!
//! For list-level state (scroll model, per-item measurement, settings panel), see the
//! `card-stack-adapter` crate.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - the first visible item index and its scroll offset
//! - each item's post-layout size on the scroll axis
//! - a visual layer that accepts scale, translation, and opacity
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod factors;
mod geometry;
mod memo;
mod transform;
mod types;

#[cfg(test)]
mod tests;

pub use factors::{AnimationFactors, Factor, FactorRange};
pub use geometry::ItemGeometry;
pub use memo::{TransformKey, TransformMemo};
pub use transform::{
    LayerTransform, ShadowOverlay, ShadowShape, StackInput, stack_depth, stack_transform,
};
pub use types::{LayerRect, Orientation, ScrollState};
