//! Page-supplied configuration.

use plume_browser::PlumeConfig;

/// Id of the optional `<script type="application/json">` holding the config.
pub const CONFIG_ELEMENT_ID: &str = "plume-config";

/// Read the config embedded in the page.
///
/// A page without a config element gets the defaults. A config element
/// that does not parse is reported so the caller can log it once logging
/// is up.
pub fn read() -> Result<PlumeConfig, serde_json::Error> {
    let text = gloo_utils::document()
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content());

    match text {
        Some(json) if !json.trim().is_empty() => PlumeConfig::from_json(&json),
        _ => Ok(PlumeConfig::default()),
    }
}
