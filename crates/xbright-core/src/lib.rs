pub mod config;
pub mod model;
pub mod panel;

pub use config::PanelConfig;
pub use model::{Adjust, OutputId, OutputList, SettingRange};
pub use panel::{DisplayBackend, PanelState, Reaction, UiEvent};
