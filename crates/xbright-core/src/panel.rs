//! Panel state and event handling, independent of the widget toolkit.
//!
//! The GTK layer forwards every widget signal as a [`UiEvent`] to
//! [`PanelState::handle`] and applies the returned [`Reaction`] to its widgets.
//! All calls happen on the UI thread and block on the backend.

use tracing::{debug, info, warn};

use crate::model::{
    brightness_label, gamma_label, Adjust, OutputId, OutputList, SettingRange, DEFAULT_BRIGHTNESS,
    DEFAULT_GAMMA,
};

/// Something that can list outputs and read/write their colour settings.
pub trait DisplayBackend {
    type Error: std::error::Error;

    fn probe_outputs(&self) -> Result<OutputList, Self::Error>;
    /// `Ok(None)` when the tool ran but reported no usable brightness.
    fn read_brightness(&self, output: &OutputId) -> Result<Option<f64>, Self::Error>;
    fn apply_brightness(&self, output: &OutputId, value: f64) -> Result<(), Self::Error>;
    fn apply_gamma(&self, output: &OutputId, value: f64) -> Result<(), Self::Error>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiEvent {
    /// Dropdown selection changed to this position.
    OutputSelected(u32),
    /// Brightness slider value changed, by the user or programmatically.
    BrightnessMoved(f64),
    BrightnessButton { action: Adjust, slider: f64 },
    GammaMoved(f64),
    GammaButton { action: Adjust, slider: f64 },
}

/// What the widget layer has to do after an event.
#[derive(Debug, Clone, PartialEq)]
pub enum Reaction {
    None,
    BrightnessLabel(String),
    GammaLabel(String),
    /// Move the slider; its change signal comes back as `BrightnessMoved`.
    SetBrightnessSlider(f64),
    SetGammaSlider(f64),
}

pub struct PanelState<B> {
    backend: B,
    outputs: OutputList,
    selected: Option<usize>,
    brightness: f64,
    gamma: Option<f64>,
}

impl<B: DisplayBackend> PanelState<B> {
    /// Probe outputs, select the first one and read its brightness.
    pub fn new(backend: B, gamma: bool) -> Self {
        let outputs = match backend.probe_outputs() {
            Ok(outputs) => outputs,
            Err(e) => {
                warn!("Failed to detect video outputs: {e}");
                Vec::new()
            }
        };
        info!(count = outputs.len(), "detected outputs: {:?}", outputs);

        let mut state = Self {
            backend,
            selected: if outputs.is_empty() { None } else { Some(0) },
            outputs,
            brightness: DEFAULT_BRIGHTNESS,
            gamma: gamma.then_some(DEFAULT_GAMMA),
        };
        state.brightness = state.current_brightness();
        state
    }

    pub fn outputs(&self) -> &[OutputId] {
        &self.outputs
    }

    pub fn selected_index(&self) -> Option<u32> {
        self.selected.and_then(|i| u32::try_from(i).ok())
    }

    pub fn selected_output(&self) -> Option<&OutputId> {
        self.selected.and_then(|i| self.outputs.get(i))
    }

    pub fn brightness(&self) -> f64 {
        self.brightness
    }

    pub fn gamma(&self) -> Option<f64> {
        self.gamma
    }

    pub fn brightness_label(&self) -> String {
        brightness_label(self.brightness)
    }

    pub fn gamma_label(&self) -> Option<String> {
        self.gamma.map(gamma_label)
    }

    pub fn handle(&mut self, event: UiEvent) -> Reaction {
        match event {
            UiEvent::OutputSelected(position) => self.select(position),
            UiEvent::BrightnessMoved(value) => {
                self.brightness = SettingRange::BRIGHTNESS.clamp(value);
                self.write_brightness();
                Reaction::BrightnessLabel(self.brightness_label())
            }
            UiEvent::BrightnessButton { action, slider } => {
                Reaction::SetBrightnessSlider(SettingRange::BRIGHTNESS.adjust(slider, action))
            }
            UiEvent::GammaMoved(value) => {
                if self.gamma.is_none() {
                    debug!("gamma event ignored, gamma controls are disabled");
                    return Reaction::None;
                }
                let value = SettingRange::GAMMA.clamp(value);
                self.gamma = Some(value);
                self.write_gamma(value);
                Reaction::GammaLabel(gamma_label(value))
            }
            UiEvent::GammaButton { action, slider } => {
                if self.gamma.is_none() {
                    return Reaction::None;
                }
                Reaction::SetGammaSlider(SettingRange::GAMMA.adjust(slider, action))
            }
        }
    }

    fn select(&mut self, position: u32) -> Reaction {
        let index = position as usize;
        let Some(output) = self.outputs.get(index) else {
            debug!(position, "selection outside of output list ignored");
            return Reaction::None;
        };
        info!("selected output {output}");
        self.selected = Some(index);
        self.brightness = self.current_brightness();
        Reaction::BrightnessLabel(self.brightness_label())
    }

    fn current_brightness(&self) -> f64 {
        let Some(output) = self.selected_output() else {
            return DEFAULT_BRIGHTNESS;
        };
        match self.backend.read_brightness(output) {
            Ok(Some(value)) => value,
            Ok(None) => {
                debug!("no brightness reported for {output}, using {DEFAULT_BRIGHTNESS}");
                DEFAULT_BRIGHTNESS
            }
            Err(e) => {
                warn!("Failed to get brightness: {e}");
                DEFAULT_BRIGHTNESS
            }
        }
    }

    fn write_brightness(&self) {
        let Some(output) = self.selected_output() else {
            debug!("no output selected, brightness not applied");
            return;
        };
        if let Err(e) = self.backend.apply_brightness(output, self.brightness) {
            warn!("Failed to set brightness: {e}");
        }
    }

    fn write_gamma(&self, value: f64) {
        let Some(output) = self.selected_output() else {
            debug!("no output selected, gamma not applied");
            return;
        };
        if let Err(e) = self.backend.apply_gamma(output, value) {
            warn!("Failed to set gamma: {e}");
        }
    }
}
