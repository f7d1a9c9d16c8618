//! CodeMirror widget backend.
//!
//! The page bundles `js/codemirror_bridge.js`, which installs a
//! `PlumeCodeMirror` global wrapping CodeMirror 6 and its language
//! packages. Looking the bridge up as a global keeps this crate free of npm
//! imports, so it loads in `wasm-bindgen-test` without a bundler.

use plume_core::{ChangeSink, EditingSetup, PlumeError, WidgetBackend, WidgetConfig};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::js_error::{describe, host_error};

// === Bridge bindings ===

#[wasm_bindgen]
extern "C" {
    /// A live CodeMirror `EditorView`.
    #[derive(Debug, Clone)]
    pub type EditorView;

    #[wasm_bindgen(method)]
    fn focus(this: &EditorView);

    #[wasm_bindgen(method)]
    fn destroy(this: &EditorView);

    #[wasm_bindgen(catch, js_namespace = PlumeCodeMirror, js_name = createEditor)]
    fn create_editor(
        parent: &Element,
        doc: &str,
        options: &JsValue,
        on_change: &js_sys::Function,
    ) -> Result<EditorView, JsValue>;

    #[wasm_bindgen(js_namespace = PlumeCodeMirror, js_name = editorText)]
    fn editor_text(view: &EditorView) -> String;
}

/// Extension selection handed to `createEditor`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BridgeOptions {
    grammar: Option<&'static str>,
    jsx: bool,
    typescript: bool,
    basic_setup: bool,
    line_wrapping: bool,
}

impl From<&WidgetConfig<'_>> for BridgeOptions {
    fn from(config: &WidgetConfig<'_>) -> Self {
        let (jsx, typescript) = match config.grammar {
            Some(plume_core::Grammar::JavaScript { jsx, typescript }) => (jsx, typescript),
            _ => (false, false),
        };
        Self {
            grammar: config.grammar.map(|g| g.id()),
            jsx,
            typescript,
            basic_setup: config.setup == EditingSetup::Basic,
            line_wrapping: config.line_wrapping,
        }
    }
}

// === Backend ===

/// Mounts CodeMirror views into the element matching `selector`.
#[derive(Debug, Clone)]
pub struct CodeMirrorBackend {
    selector: String,
}

impl CodeMirrorBackend {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
        }
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }
}

/// A mounted view plus the change callback it calls into.
pub struct CodeMirrorInstance {
    view: EditorView,
    // Must outlive the view; JS calls it on every document change.
    _on_change: Closure<dyn FnMut(String)>,
}

impl CodeMirrorInstance {
    pub fn view(&self) -> &EditorView {
        &self.view
    }
}

impl WidgetBackend for CodeMirrorBackend {
    type Container = Element;
    type Instance = CodeMirrorInstance;

    fn locate_container(&self) -> Result<Element, PlumeError> {
        gloo_utils::document()
            .query_selector(&self.selector)
            .ok()
            .flatten()
            .ok_or_else(|| PlumeError::DomTargetMissing(self.selector.clone()))
    }

    fn clear_container(&self, container: &Element) {
        container.set_inner_html("");
    }

    fn construct(
        &self,
        config: &WidgetConfig<'_>,
        container: &Element,
        on_change: ChangeSink,
    ) -> Result<CodeMirrorInstance, PlumeError> {
        let options = serde_wasm_bindgen::to_value(&BridgeOptions::from(config))
            .map_err(|e| PlumeError::Host(e.to_string()))?;

        let on_change = Closure::<dyn FnMut(String)>::new(move |text: String| on_change(text));
        let view = create_editor(container, config.doc, &options, on_change.as_ref().unchecked_ref())
            .map_err(|e| {
                tracing::error!("CodeMirror construction failed: {}", describe(&e));
                host_error(e)
            })?;

        Ok(CodeMirrorInstance {
            view,
            _on_change: on_change,
        })
    }

    fn read_content(&self, instance: &CodeMirrorInstance) -> String {
        editor_text(&instance.view)
    }

    fn focus(&self, instance: &CodeMirrorInstance) {
        instance.view.focus();
    }

    fn destroy(&self, instance: CodeMirrorInstance) {
        instance.view.destroy();
    }
}
