use std::io::Write;

use anyhow::{Context, Result};
use gtk::gdk::Display as GdkDisplay;
use gtk::CssProvider;

const CSS: &str = r#"
window {
    background-color: #f5f5f5;
}
label {
    font-size: 16px;
    padding: 5px;
    color: #000000;
}
button {
    padding: 10px;
    font-size: 16px;
    color: #ffffff;
    background-color: #007acc;
    border-radius: 5px;
    border: none;
}
button:hover {
    background-color: #005f9e;
}
scale trough {
    background-color: #e0e0e0;
}
scale slider {
    background-color: #007acc;
}
"#;

/// Write the stylesheet to a temporary `.css` file, load it and install it
/// for the default display. The file is removed when this returns.
pub fn install() -> Result<()> {
    let mut file = tempfile::Builder::new()
        .prefix("xbright-")
        .suffix(".css")
        .tempfile()
        .context("failed to create stylesheet file")?;
    file.write_all(CSS.as_bytes())
        .and_then(|_| file.flush())
        .context("failed to write stylesheet file")?;

    let provider = CssProvider::new();
    provider.load_from_path(file.path());

    let display = GdkDisplay::default().context("no default display for stylesheet")?;
    gtk::style_context_add_provider_for_display(
        &display,
        &provider,
        gtk::STYLE_PROVIDER_PRIORITY_USER,
    );
    Ok(())
}
