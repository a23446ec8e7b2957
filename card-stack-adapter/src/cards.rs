use card_stack::{AnimationFactors, Factor, Orientation};

use crate::{ItemKey, SettingsPanel, StackKey, StackedList, StackedListOptions};

/// Composition root: owns the list and whether the settings sheet is showing.
///
/// The current factors and orientation live in the list only, so changes made through
/// [`Self::list_mut`] show up in the settings panel as well. Nothing is persisted.
#[derive(Clone, Debug)]
pub struct StackedCards<K = ItemKey> {
    list: StackedList<K>,
    settings_open: bool,
}

impl<K: StackKey + 'static> StackedCards<K> {
    pub fn new(options: StackedListOptions<K>) -> Self {
        Self {
            list: StackedList::new(options),
            settings_open: false,
        }
    }

    pub fn list(&self) -> &StackedList<K> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut StackedList<K> {
        &mut self.list
    }

    pub fn factors(&self) -> &AnimationFactors {
        self.list.factors()
    }

    pub fn orientation(&self) -> Orientation {
        self.list.orientation()
    }

    pub fn is_settings_open(&self) -> bool {
        self.settings_open
    }

    pub fn open_settings(&mut self) {
        self.settings_open = true;
    }

    pub fn dismiss_settings(&mut self) {
        self.settings_open = false;
    }

    /// The settings sheet, while it is open.
    pub fn settings_panel(&self) -> Option<SettingsPanel<'_>> {
        self.settings_open
            .then(|| SettingsPanel::new(self.list.factors()).with_orientation(self.orientation()))
    }

    pub fn apply_factors(&mut self, factors: AnimationFactors) {
        self.list.set_factors(factors);
    }

    pub fn reset_factors(&mut self) {
        self.apply_factors(AnimationFactors::default());
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.list.set_orientation(orientation);
    }

    /// Routes a slider movement through the settings panel.
    pub fn on_slider_change(&mut self, factor: Factor, value: f32) {
        let mut next = None;
        SettingsPanel::new(self.list.factors()).change(factor, value, |f| next = Some(f));
        if let Some(factors) = next {
            self.apply_factors(factors);
        }
    }

    /// Routes the reset button through the settings panel.
    pub fn on_reset_click(&mut self) {
        let mut reset = false;
        SettingsPanel::new(self.list.factors()).reset(|| reset = true);
        if reset {
            self.reset_factors();
        }
    }

    /// Routes the orientation switch through the settings panel.
    pub fn on_orientation_toggle(&mut self) {
        let mut next = None;
        SettingsPanel::new(self.list.factors())
            .with_orientation(self.orientation())
            .toggle_orientation(|o| next = Some(o));
        if let Some(orientation) = next {
            self.set_orientation(orientation);
        }
    }
}
