/// The four coefficients that control how a card responds to its stack depth.
///
/// Values are replaced wholesale: every setter returns a new value and the
/// current one is never mutated in place. The documented slider ranges are a
/// convention only; the transform accepts any finite value.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimationFactors {
    /// Fractional shrink per unit of stack depth.
    pub scale_factor: f32,
    /// Fraction of `size + spacing` a card slides toward the leading edge per unit of depth.
    pub translation_factor: f32,
    /// Fade-out rate per unit of depth beyond the first.
    pub alpha_factor: f32,
    /// Shadow opacity growth per unit of depth.
    pub shadow_alpha_factor: f32,
}

impl AnimationFactors {
    pub const DEFAULT_SCALE_FACTOR: f32 = 0.05;
    pub const DEFAULT_TRANSLATION_FACTOR: f32 = 0.95;
    pub const DEFAULT_ALPHA_FACTOR: f32 = 10.0;
    pub const DEFAULT_SHADOW_ALPHA_FACTOR: f32 = 0.2;

    pub const DEFAULT: Self = Self {
        scale_factor: Self::DEFAULT_SCALE_FACTOR,
        translation_factor: Self::DEFAULT_TRANSLATION_FACTOR,
        alpha_factor: Self::DEFAULT_ALPHA_FACTOR,
        shadow_alpha_factor: Self::DEFAULT_SHADOW_ALPHA_FACTOR,
    };

    pub const fn new(
        scale_factor: f32,
        translation_factor: f32,
        alpha_factor: f32,
        shadow_alpha_factor: f32,
    ) -> Self {
        Self {
            scale_factor,
            translation_factor,
            alpha_factor,
            shadow_alpha_factor,
        }
    }

    pub fn get(&self, factor: Factor) -> f32 {
        match factor {
            Factor::Scale => self.scale_factor,
            Factor::Translation => self.translation_factor,
            Factor::Alpha => self.alpha_factor,
            Factor::ShadowAlpha => self.shadow_alpha_factor,
        }
    }

    /// Returns a copy with one coefficient replaced.
    pub fn with(self, factor: Factor, value: f32) -> Self {
        match factor {
            Factor::Scale => self.with_scale_factor(value),
            Factor::Translation => self.with_translation_factor(value),
            Factor::Alpha => self.with_alpha_factor(value),
            Factor::ShadowAlpha => self.with_shadow_alpha_factor(value),
        }
    }

    pub fn with_scale_factor(mut self, scale_factor: f32) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    pub fn with_translation_factor(mut self, translation_factor: f32) -> Self {
        self.translation_factor = translation_factor;
        self
    }

    pub fn with_alpha_factor(mut self, alpha_factor: f32) -> Self {
        self.alpha_factor = alpha_factor;
        self
    }

    pub fn with_shadow_alpha_factor(mut self, shadow_alpha_factor: f32) -> Self {
        self.shadow_alpha_factor = shadow_alpha_factor;
        self
    }

    pub fn is_default(&self) -> bool {
        self.bits() == Self::DEFAULT.bits()
    }

    /// Exact bit patterns of the four fields, in declaration order.
    ///
    /// Two values with equal bits produce bit-identical transforms, which makes this a
    /// suitable memoization key (unlike `PartialEq`, it distinguishes `0.0` from `-0.0`
    /// and treats equal NaNs as equal).
    pub fn bits(&self) -> [u32; 4] {
        [
            self.scale_factor.to_bits(),
            self.translation_factor.to_bits(),
            self.alpha_factor.to_bits(),
            self.shadow_alpha_factor.to_bits(),
        ]
    }
}

impl Default for AnimationFactors {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Names one coefficient of [`AnimationFactors`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Factor {
    Scale,
    Translation,
    Alpha,
    ShadowAlpha,
}

impl Factor {
    pub const ALL: [Factor; 4] = [
        Factor::Scale,
        Factor::Translation,
        Factor::Alpha,
        Factor::ShadowAlpha,
    ];

    /// The conventional slider range for this coefficient.
    pub const fn range(self) -> FactorRange {
        match self {
            Self::Scale | Self::Translation | Self::ShadowAlpha => FactorRange::new(0.0, 1.0),
            Self::Alpha => FactorRange::new(0.0, 20.0),
        }
    }

    pub const fn default_value(self) -> f32 {
        match self {
            Self::Scale => AnimationFactors::DEFAULT_SCALE_FACTOR,
            Self::Translation => AnimationFactors::DEFAULT_TRANSLATION_FACTOR,
            Self::Alpha => AnimationFactors::DEFAULT_ALPHA_FACTOR,
            Self::ShadowAlpha => AnimationFactors::DEFAULT_SHADOW_ALPHA_FACTOR,
        }
    }
}

/// A closed `[min, max]` value range.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FactorRange {
    pub min: f32,
    pub max: f32,
}

impl FactorRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f32 {
        self.max - self.min
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamps into the range. NaN maps to `min`.
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }

    /// Position of `value` inside the range, in `[0, 1]`.
    pub fn fraction_of(&self, value: f32) -> f32 {
        let span = self.span();
        if span <= 0.0 {
            return 0.0;
        }
        ((self.clamp(value) - self.min) / span).clamp(0.0, 1.0)
    }

    /// Inverse of [`Self::fraction_of`].
    pub fn value_at(&self, fraction: f32) -> f32 {
        let t = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        self.clamp(self.min + self.span() * t)
    }
}
