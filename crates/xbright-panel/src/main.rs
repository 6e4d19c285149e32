mod style;

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use gtk::prelude::*;
use gtk::{
    Align, Application, ApplicationWindow, Box as GtkBox, Button, DropDown, Label, Orientation,
    PositionType, Scale,
};
use tracing::warn;
use tracing_subscriber::EnvFilter;
use xbright_core::{Adjust, PanelConfig, PanelState, Reaction, SettingRange, UiEvent};
use xbright_xrandr::Xrandr;

type Dispatch = Rc<dyn Fn(UiEvent)>;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let config = panel_config();
    let app = Application::builder()
        .application_id(config.application_id)
        .build();

    app.connect_activate(move |app| {
        build_ui(app, &config);
    });

    app.run();
    Ok(())
}

#[cfg(feature = "gamma")]
fn panel_config() -> PanelConfig {
    PanelConfig::with_gamma()
}

#[cfg(not(feature = "gamma"))]
fn panel_config() -> PanelConfig {
    PanelConfig::brightness_only()
}

/// Widgets whose state follows the panel.
#[derive(Clone)]
struct Widgets {
    brightness_label: Label,
    brightness_scale: Scale,
    gamma: Option<(Label, Scale)>,
}

impl Widgets {
    fn apply(&self, reaction: Reaction) {
        match reaction {
            Reaction::None => {}
            Reaction::BrightnessLabel(text) => self.brightness_label.set_text(&text),
            Reaction::SetBrightnessSlider(value) => self.brightness_scale.set_value(value),
            Reaction::GammaLabel(text) => {
                if let Some((label, _)) = &self.gamma {
                    label.set_text(&text);
                }
            }
            Reaction::SetGammaSlider(value) => {
                if let Some((_, scale)) = &self.gamma {
                    scale.set_value(value);
                }
            }
        }
    }
}

fn build_ui(app: &Application, config: &PanelConfig) {
    let panel = Rc::new(RefCell::new(PanelState::new(Xrandr::new(), config.gamma)));

    let win = ApplicationWindow::builder()
        .application(app)
        .title(config.title)
        .default_width(config.default_width)
        .default_height(config.default_height)
        .build();

    if let Err(e) = style::install() {
        warn!("stylesheet not applied: {e:#}");
    }

    let vbox = GtkBox::new(Orientation::Vertical, 20);
    vbox.set_margin_top(20);
    vbox.set_margin_bottom(20);
    vbox.set_margin_start(20);
    vbox.set_margin_end(20);

    let state = panel.borrow();
    let names: Vec<&str> = state.outputs().iter().map(|o| o.as_str()).collect();
    let dropdown = DropDown::from_strings(&names);
    if let Some(index) = state.selected_index() {
        dropdown.set_selected(index);
    }
    dropdown.set_size_request(150, -1);
    vbox.append(&Label::new(Some("Select Device:")));
    vbox.append(&dropdown);

    let brightness_label = centered_label(&state.brightness_label());
    let brightness_scale = new_scale(SettingRange::BRIGHTNESS, state.brightness());
    vbox.append(&brightness_label);

    let gamma = match (state.gamma(), state.gamma_label()) {
        (Some(value), Some(text)) => {
            Some((centered_label(&text), new_scale(SettingRange::GAMMA, value)))
        }
        _ => None,
    };
    drop(state);

    let widgets = Widgets { brightness_label, brightness_scale: brightness_scale.clone(), gamma };

    let dispatch: Dispatch = {
        let panel = panel.clone();
        let widgets = widgets.clone();
        Rc::new(move |event| {
            // Release the borrow before touching widgets: moving a slider
            // re-enters this closure through its value-changed signal.
            let reaction = panel.borrow_mut().handle(event);
            widgets.apply(reaction);
        })
    };

    let d = dispatch.clone();
    dropdown.connect_selected_notify(move |dd| d(UiEvent::OutputSelected(dd.selected())));

    let d = dispatch.clone();
    brightness_scale.connect_value_changed(move |s| d(UiEvent::BrightnessMoved(s.value())));
    vbox.append(&slider_row(&brightness_scale, &dispatch, |action, slider| {
        UiEvent::BrightnessButton { action, slider }
    }));

    if let Some((gamma_label, gamma_scale)) = &widgets.gamma {
        vbox.append(gamma_label);
        let d = dispatch.clone();
        gamma_scale.connect_value_changed(move |s| d(UiEvent::GammaMoved(s.value())));
        vbox.append(&slider_row(gamma_scale, &dispatch, |action, slider| {
            UiEvent::GammaButton { action, slider }
        }));
    }

    win.set_child(Some(&vbox));
    win.present();
}

/// Min / - / slider / + / Max.
fn slider_row(scale: &Scale, dispatch: &Dispatch, event: fn(Adjust, f64) -> UiEvent) -> GtkBox {
    let row = GtkBox::new(Orientation::Horizontal, 10);
    let button = |label: &str, action: Adjust| {
        let btn = Button::with_label(label);
        let scale = scale.clone();
        let d = dispatch.clone();
        btn.connect_clicked(move |_| d(event(action, scale.value())));
        btn
    };

    row.append(&button("Min", Adjust::Min));
    row.append(&button("-", Adjust::Decrease));
    row.append(scale);
    row.append(&button("+", Adjust::Increase));
    row.append(&button("Max", Adjust::Max));
    row
}

fn new_scale(range: SettingRange, value: f64) -> Scale {
    let scale = Scale::with_range(Orientation::Horizontal, range.min, range.max, range.step);
    scale.set_digits(2);
    scale.set_draw_value(true);
    scale.set_value_pos(PositionType::Right);
    scale.set_hexpand(true);
    scale.set_value(value);
    scale
}

fn centered_label(text: &str) -> Label {
    let label = Label::new(Some(text));
    label.set_halign(Align::Center);
    label
}
