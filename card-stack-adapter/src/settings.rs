use alloc::format;
use alloc::string::String;

use card_stack::{AnimationFactors, Factor, FactorRange, Orientation};

/// One labeled slider bound to a single coefficient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FactorSlider {
    pub factor: Factor,
    pub label: &'static str,
    pub description: &'static str,
    pub value: f32,
    pub range: FactorRange,
}

impl FactorSlider {
    /// Label with the current value, e.g. `"Scale factor: 0.05"`.
    pub fn caption(&self) -> String {
        format!("{}: {:.2}", self.label, self.value)
    }

    /// Thumb position in `[0, 1]`.
    pub fn fraction(&self) -> f32 {
        self.range.fraction_of(self.value)
    }
}

pub fn factor_label(factor: Factor) -> &'static str {
    match factor {
        Factor::Scale => "Scale factor",
        Factor::Translation => "Translation factor",
        Factor::Alpha => "Alpha factor",
        Factor::ShadowAlpha => "Shadow alpha factor",
    }
}

pub fn factor_description(factor: Factor) -> &'static str {
    match factor {
        Factor::Scale => "How much a card shrinks per card stacked above it.",
        Factor::Translation => "How far a card slides toward the edge as it stacks.",
        Factor::Alpha => "How quickly a card fades once it is buried under the top card.",
        Factor::ShadowAlpha => "How quickly the shadow over a stacked card darkens.",
    }
}

/// A stateless view over caller-owned animation settings.
///
/// Every change goes through a callback with a full replacement value; the panel never keeps
/// or mutates state of its own.
#[derive(Clone, Copy, Debug)]
pub struct SettingsPanel<'a> {
    factors: &'a AnimationFactors,
    orientation: Option<Orientation>,
}

impl<'a> SettingsPanel<'a> {
    pub const TITLE: &'static str = "Animation settings";
    pub const RESET_LABEL: &'static str = "Reset";

    pub fn new(factors: &'a AnimationFactors) -> Self {
        Self {
            factors,
            orientation: None,
        }
    }

    /// Adds an orientation switch to the panel.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    pub fn title(&self) -> &'static str {
        Self::TITLE
    }

    pub fn factors(&self) -> &'a AnimationFactors {
        self.factors
    }

    pub fn orientation(&self) -> Option<Orientation> {
        self.orientation
    }

    pub fn slider(&self, factor: Factor) -> FactorSlider {
        FactorSlider {
            factor,
            label: factor_label(factor),
            description: factor_description(factor),
            value: self.factors.get(factor),
            range: factor.range(),
        }
    }

    /// One slider per coefficient, in display order.
    pub fn sliders(&self) -> [FactorSlider; 4] {
        Factor::ALL.map(|factor| self.slider(factor))
    }

    /// Clamps `value` into the slider range and reports the resulting factors.
    pub fn change(&self, factor: Factor, value: f32, on_change: impl FnOnce(AnimationFactors)) {
        let value = factor.range().clamp(value);
        on_change(self.factors.with(factor, value));
    }

    /// Same as [`Self::change`], for sliders that report a normalized `[0, 1]` position.
    pub fn change_fraction(
        &self,
        factor: Factor,
        fraction: f32,
        on_change: impl FnOnce(AnimationFactors),
    ) {
        let value = factor.range().value_at(fraction);
        on_change(self.factors.with(factor, value));
    }

    pub fn reset(&self, on_reset: impl FnOnce()) {
        on_reset();
    }

    /// Reports the opposite orientation. Does nothing when the panel has no orientation switch.
    pub fn toggle_orientation(&self, on_orientation_change: impl FnOnce(Orientation)) {
        if let Some(orientation) = self.orientation {
            on_orientation_change(orientation.flipped());
        }
    }
}
