//! WASM browser tests for plume-browser.
//!
//! Run with: `wasm-pack test --headless --firefox` or `--chrome`

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

use plume_browser::{
    CodeMirrorBackend, EditorHost, FileAccessCapability, PlumeError, Shortcut, chord_from_event,
    detect_file_access_capability,
    fallback::{download_text, open_with_input},
    select_mode, shortcut_from_event,
};

/// Stand-in for the bundled CodeMirror bridge: each "view" is a textarea.
fn install_fake_bridge() {
    js_sys::eval(
        r#"
        window.PlumeCodeMirror = {
          createEditor(parent, doc, options, onChange) {
            const el = document.createElement("textarea");
            el.value = doc;
            el.dataset.grammar = options.grammar ?? "";
            el.dataset.basic = String(options.basicSetup);
            el.dataset.jsx = String(options.jsx);
            parent.appendChild(el);
            const view = {
              el,
              focus() { el.focus(); },
              destroy() { el.remove(); },
              type(text) { el.value = text; onChange(text); },
            };
            window.__plumeLastView = view;
            return view;
          },
          editorText(view) { return view.el.value; },
        };
        "#,
    )
    .unwrap();
}

fn make_container(id: &str) -> web_sys::Element {
    let document = gloo_utils::document();
    if let Some(existing) = document.get_element_by_id(id) {
        existing.remove();
    }
    let div = document.create_element("div").unwrap();
    div.set_id(id);
    gloo_utils::body().append_child(&div).unwrap();
    div
}

fn keydown(key: &str, ctrl: bool, shift: bool) -> web_sys::KeyboardEvent {
    let init = web_sys::KeyboardEventInit::new();
    init.set_key(key);
    init.set_ctrl_key(ctrl);
    init.set_shift_key(shift);
    init.set_cancelable(true);
    web_sys::KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap()
}

fn textareas(container: &web_sys::Element) -> Vec<web_sys::HtmlTextAreaElement> {
    let nodes = container.query_selector_all("textarea").unwrap();
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .map(|node| node.unchecked_into())
        .collect()
}

// === Keyboard tests ===

#[wasm_bindgen_test]
fn test_chord_reads_modifiers() {
    let chord = chord_from_event(&keydown("S", true, true));
    assert_eq!(chord.key, "S");
    assert!(chord.ctrl);
    assert!(chord.shift);
}

#[wasm_bindgen_test]
fn test_shortcut_prevents_browser_save() {
    let event = keydown("s", true, false);
    assert_eq!(shortcut_from_event(&event), Some(Shortcut::Save));
    assert!(event.default_prevented());
}

#[wasm_bindgen_test]
fn test_plain_keys_pass_through() {
    let event = keydown("s", false, false);
    assert_eq!(shortcut_from_event(&event), None);
    assert!(!event.default_prevented());
}

// === Capability tests ===

#[wasm_bindgen_test]
fn test_capability_matches_window() {
    let window = gloo_utils::window();
    let is_function = |name: &str| {
        js_sys::Reflect::get(&window, &name.into())
            .unwrap()
            .is_function()
    };
    let expected = if is_function("showOpenFilePicker") && is_function("showSaveFilePicker") {
        FileAccessCapability::Native
    } else {
        FileAccessCapability::Fallback
    };
    assert_eq!(detect_file_access_capability(), expected);
}

// === Widget tests ===

#[wasm_bindgen_test]
fn test_missing_container_fails() {
    let backend = CodeMirrorBackend::new("#plume-no-such-element");
    let mut host = EditorHost::new(backend, Rc::new(|_: String| {}));

    let err = host.rebuild(&select_mode("a.js"), "").unwrap_err();
    assert_eq!(
        err,
        PlumeError::DomTargetMissing("#plume-no-such-element".into())
    );
}

#[wasm_bindgen_test]
fn test_rebuild_keeps_one_view_with_content() {
    install_fake_bridge();
    let container = make_container("plume-test-rebuild");
    let mut host = EditorHost::new(
        CodeMirrorBackend::new("#plume-test-rebuild"),
        Rc::new(|_: String| {}),
    );

    host.rebuild(&select_mode("a.jsx"), "const a = <b/>;").unwrap();
    let views = textareas(&container);
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].get_attribute("data-grammar").as_deref(), Some("javascript"));
    assert_eq!(views[0].get_attribute("data-jsx").as_deref(), Some("true"));

    host.rebuild(&select_mode("notes.txt"), "const a = <b/>;").unwrap();
    let views = textareas(&container);
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].get_attribute("data-grammar").as_deref(), Some(""));
    assert_eq!(views[0].get_attribute("data-basic").as_deref(), Some("false"));
    assert_eq!(host.current_content(), "const a = <b/>;");
}

#[wasm_bindgen_test]
fn test_view_changes_reach_sink() {
    install_fake_bridge();
    make_container("plume-test-change");
    let received = Rc::new(RefCell::new(String::new()));
    let target = received.clone();
    let mut host = EditorHost::new(
        CodeMirrorBackend::new("#plume-test-change"),
        Rc::new(move |text: String| *target.borrow_mut() = text),
    );
    host.rebuild(&select_mode("a.py"), "x = 1").unwrap();

    js_sys::eval("window.__plumeLastView.type('x = 2')").unwrap();

    assert_eq!(*received.borrow(), "x = 2");
    assert_eq!(host.current_content(), "x = 2");
}

// === Fallback picker tests ===

fn file_inputs() -> u32 {
    gloo_utils::body()
        .query_selector_all("input[type=file]")
        .unwrap()
        .length()
}

#[wasm_bindgen_test]
async fn test_cancelled_file_input_is_cancellation() {
    // Fires once `open_with_input` is suspended on the picker.
    js_sys::eval(
        r#"setTimeout(() => {
            document.querySelector("body > input[type=file]").dispatchEvent(new Event("cancel"));
        }, 0)"#,
    )
    .unwrap();

    let err = open_with_input().await.unwrap_err();

    assert_eq!(err, PlumeError::PickerCancelled);
    assert_eq!(file_inputs(), 0);
}

// === Download tests ===

#[wasm_bindgen_test]
fn test_download_cleans_up_anchor() {
    let before = gloo_utils::document()
        .query_selector_all("a[download]")
        .unwrap()
        .length();

    download_text("notes.txt", "remember the milk").unwrap();

    let after = gloo_utils::document()
        .query_selector_all("a[download]")
        .unwrap()
        .length();
    assert_eq!(before, after);
}
