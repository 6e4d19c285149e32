/// Window-level settings for the two panel variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelConfig {
    pub application_id: &'static str,
    pub title: &'static str,
    pub default_width: i32,
    pub default_height: i32,
    /// Show the contrast (gamma) row.
    pub gamma: bool,
}

impl PanelConfig {
    pub const APPLICATION_ID: &'static str = "io.github.xbright.panel";

    pub fn brightness_only() -> Self {
        Self {
            application_id: Self::APPLICATION_ID,
            title: "Brightness control",
            default_width: 300,
            default_height: 200,
            gamma: false,
        }
    }

    pub fn with_gamma() -> Self {
        Self {
            application_id: Self::APPLICATION_ID,
            title: "Brightness and Contrast Control",
            default_width: 300,
            default_height: 400,
            gamma: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_differ_in_title_and_gamma() {
        let plain = PanelConfig::brightness_only();
        let full = PanelConfig::with_gamma();
        assert_eq!(plain.title, "Brightness control");
        assert_eq!(full.title, "Brightness and Contrast Control");
        assert!(!plain.gamma);
        assert!(full.gamma);
        assert!(full.default_height > plain.default_height);
    }
}
