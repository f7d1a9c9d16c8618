//! Toolbar DOM: file buttons and the filename field.

use plume_browser::{PlumeError, ToolbarState};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlInputElement};

/// The toolbar's controls, rendered into the toolbar container.
pub struct Toolbar {
    pub open: HtmlButtonElement,
    pub save_as: HtmlButtonElement,
    pub save: HtmlButtonElement,
    pub download: HtmlButtonElement,
    pub filename: HtmlInputElement,
}

impl Toolbar {
    /// Build the controls inside the element matching `selector`.
    pub fn mount(selector: &str) -> Result<Self, PlumeError> {
        let document = gloo_utils::document();
        let container = document
            .query_selector(selector)
            .ok()
            .flatten()
            .ok_or_else(|| PlumeError::DomTargetMissing(selector.to_string()))?;

        let toolbar = Self {
            open: button(&document, &container, "Open From PC")?,
            save_as: button(&document, &container, "Save As")?,
            save: button(&document, &container, "Save")?,
            download: button(&document, &container, "Download")?,
            filename: filename_field(&document, &container)?,
        };
        tracing::debug!(selector, "Mounted toolbar");
        Ok(toolbar)
    }

    /// Show the controls that apply to `state`.
    pub fn render(&self, state: &ToolbarState) {
        self.save_as.set_hidden(!state.show_handle_actions);
        self.save.set_hidden(!state.show_handle_actions);
        self.save.set_disabled(!state.save_enabled);
        self.download.set_hidden(state.show_handle_actions);

        // Only write on change so typing doesn't move the caret.
        if self.filename.value() != state.filename {
            self.filename.set_value(&state.filename);
        }
        self.filename.set_read_only(state.filename_read_only);
    }
}

fn button(
    document: &Document,
    container: &Element,
    label: &str,
) -> Result<HtmlButtonElement, PlumeError> {
    let button: HtmlButtonElement = create(document, "button")?;
    button.set_type("button");
    button.set_text_content(Some(label));
    container.append_child(&button).map_err(dom_error)?;
    Ok(button)
}

fn filename_field(
    document: &Document,
    container: &Element,
) -> Result<HtmlInputElement, PlumeError> {
    let input: HtmlInputElement = create(document, "input")?;
    input.set_type("text");
    input.set_name("filename");
    input.set_spellcheck(false);
    container.append_child(&input).map_err(dom_error)?;
    Ok(input)
}

fn create<T: JsCast>(document: &Document, tag: &str) -> Result<T, PlumeError> {
    document
        .create_element(tag)
        .map(JsCast::unchecked_into)
        .map_err(dom_error)
}

fn dom_error(err: wasm_bindgen::JsValue) -> PlumeError {
    PlumeError::Host(format!("{:?}", err))
}
