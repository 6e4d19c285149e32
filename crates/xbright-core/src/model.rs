use std::fmt;

/// Name of an xrandr output (connector), e.g. `HDMI-1` or `eDP-1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OutputId(String);

impl OutputId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OutputId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Connected outputs in the order the probe reported them.
/// Index `i` of the dropdown is always `outputs[i]`.
pub type OutputList = Vec<OutputId>;

/// Brightness used when the current value cannot be read back.
pub const DEFAULT_BRIGHTNESS: f64 = 0.99;
/// Gamma the panel starts with; it is never queried from the tool.
pub const DEFAULT_GAMMA: f64 = 1.0;

/// Button actions next to a slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjust {
    Min,
    Decrease,
    Increase,
    Max,
}

/// Closed range a slider is restricted to, plus the +/- step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettingRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl SettingRange {
    pub const BRIGHTNESS: SettingRange = SettingRange { min: 0.2, max: 1.0, step: 0.05 };
    pub const GAMMA: SettingRange = SettingRange { min: 0.5, max: 3.0, step: 0.1 };

    /// Saturate `value` into the range. Out-of-range input is clipped silently.
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }

    /// New slider position after pressing one of the four buttons.
    pub fn adjust(&self, current: f64, action: Adjust) -> f64 {
        match action {
            Adjust::Min => self.min,
            Adjust::Max => self.max,
            Adjust::Decrease => self.clamp(current - self.step),
            Adjust::Increase => self.clamp(current + self.step),
        }
    }
}

pub fn brightness_label(value: f64) -> String {
    format!("Brightness: {}%", (value * 100.0).round() as i64)
}

pub fn gamma_label(value: f64) -> String {
    format!("Contrast (Gamma): {:.2}", value)
}

/// Render a value the way xrandr arguments are written: shortest decimal
/// that round-trips, always with a fractional part (`1.0`, `0.75`).
pub fn xrandr_number(value: f64) -> String {
    let s = value.to_string();
    if !value.is_finite() || s.contains('.') {
        s
    } else {
        format!("{s}.0")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brightness_decrease_saturates_at_min() {
        let range = SettingRange::BRIGHTNESS;
        let mut v = 0.2;
        for _ in 0..10 {
            v = range.adjust(v, Adjust::Decrease);
            assert!(v >= 0.2);
        }
        assert_eq!(v, 0.2);
    }

    #[test]
    fn brightness_increase_saturates_at_max() {
        let range = SettingRange::BRIGHTNESS;
        let mut v = 1.0;
        for _ in 0..10 {
            v = range.adjust(v, Adjust::Increase);
            assert!(v <= 1.0);
        }
        assert_eq!(v, 1.0);
    }

    #[test]
    fn gamma_steps_are_clamped_both_ways() {
        let range = SettingRange::GAMMA;
        let mut low = 0.5;
        let mut high = 3.0;
        for _ in 0..40 {
            low = range.adjust(low, Adjust::Decrease);
            high = range.adjust(high, Adjust::Increase);
            assert!(low >= 0.5);
            assert!(high <= 3.0);
        }
        assert_eq!(range.adjust(2.95, Adjust::Increase), 3.0);
    }

    #[test]
    fn min_max_jump_to_range_ends() {
        assert_eq!(SettingRange::BRIGHTNESS.adjust(0.6, Adjust::Min), 0.2);
        assert_eq!(SettingRange::BRIGHTNESS.adjust(0.6, Adjust::Max), 1.0);
        assert_eq!(SettingRange::GAMMA.adjust(1.0, Adjust::Min), 0.5);
        assert_eq!(SettingRange::GAMMA.adjust(1.0, Adjust::Max), 3.0);
    }

    #[test]
    fn step_moves_by_step_inside_range() {
        let v = SettingRange::BRIGHTNESS.adjust(0.5, Adjust::Increase);
        assert!((v - 0.55).abs() < 1e-9);
        let g = SettingRange::GAMMA.adjust(1.0, Adjust::Decrease);
        assert!((g - 0.9).abs() < 1e-9);
    }

    #[test]
    fn labels() {
        assert_eq!(brightness_label(DEFAULT_BRIGHTNESS), "Brightness: 99%");
        assert_eq!(brightness_label(1.0), "Brightness: 100%");
        assert_eq!(brightness_label(0.2), "Brightness: 20%");
        assert_eq!(gamma_label(1.0), "Contrast (Gamma): 1.00");
        assert_eq!(gamma_label(2.5), "Contrast (Gamma): 2.50");
    }

    #[test]
    fn xrandr_number_keeps_fraction() {
        assert_eq!(xrandr_number(1.0), "1.0");
        assert_eq!(xrandr_number(3.0), "3.0");
        assert_eq!(xrandr_number(0.75), "0.75");
        assert_eq!(xrandr_number(0.2), "0.2");
    }
}
