//! Ownership of the live editor widget.
//!
//! The widget itself (rendering, undo, grammars) is external. `EditorHost`
//! is the only thing allowed to touch the container it lives in: it tears
//! the widget down and builds a fresh one whenever the language mode
//! changes, seeding it with the current text.

use std::rc::Rc;

use crate::error::Result;
use crate::language::{Grammar, LanguageMode};

/// Callback receiving the widget's full text after every modification.
pub type ChangeSink = Rc<dyn Fn(String)>;

/// Which bundle of editing behaviours the widget is built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditingSetup {
    /// Line numbers, bracket matching, folding, autocompletion...
    Basic,
    /// Undo history and key bindings only.
    Minimal,
}

/// Everything needed to construct one widget instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig<'a> {
    pub doc: &'a str,
    pub setup: EditingSetup,
    pub grammar: Option<Grammar>,
    pub line_wrapping: bool,
}

impl<'a> WidgetConfig<'a> {
    pub fn for_mode(mode: &LanguageMode, doc: &'a str) -> Self {
        Self {
            doc,
            setup: if mode.is_code {
                EditingSetup::Basic
            } else {
                EditingSetup::Minimal
            },
            grammar: mode.grammar,
            line_wrapping: true,
        }
    }
}

/// Platform side of the editor widget.
pub trait WidgetBackend {
    type Container;
    type Instance;

    /// Find the container element.
    ///
    /// Fails with `DomTargetMissing` when it is not in the page.
    fn locate_container(&self) -> Result<Self::Container>;

    /// Remove everything inside the container.
    fn clear_container(&self, container: &Self::Container);

    /// Build a widget inside `container`.
    fn construct(
        &self,
        config: &WidgetConfig<'_>,
        container: &Self::Container,
        on_change: ChangeSink,
    ) -> Result<Self::Instance>;

    /// Full current text of a widget.
    fn read_content(&self, instance: &Self::Instance) -> String;

    fn focus(&self, instance: &Self::Instance);

    /// Release a widget that is being replaced.
    fn destroy(&self, instance: Self::Instance) {
        drop(instance);
    }
}

/// Owner of the single live widget instance.
pub struct EditorHost<B: WidgetBackend> {
    backend: B,
    on_change: ChangeSink,
    instance: Option<B::Instance>,
    mode: Option<LanguageMode>,
    seed: String,
}

impl<B: WidgetBackend> EditorHost<B> {
    pub fn new(backend: B, on_change: ChangeSink) -> Self {
        Self {
            backend,
            on_change,
            instance: None,
            mode: None,
            seed: String::new(),
        }
    }

    /// Replace the live widget with a fresh one for `mode`, seeded with `content`.
    ///
    /// Cursor position and undo history do not survive a rebuild. If the
    /// container cannot be found the current widget is left in place.
    pub fn rebuild(&mut self, mode: &LanguageMode, content: &str) -> Result<()> {
        let container = self.backend.locate_container()?;

        if let Some(old) = self.instance.take() {
            self.backend.destroy(old);
        }
        self.backend.clear_container(&container);

        let config = WidgetConfig::for_mode(mode, content);
        let instance = self
            .backend
            .construct(&config, &container, self.on_change.clone())?;

        tracing::debug!(
            grammar = mode.grammar.map(Grammar::id),
            is_code = mode.is_code,
            len = content.len(),
            "Rebuilt editor widget"
        );

        self.instance = Some(instance);
        self.mode = Some(*mode);
        self.seed = content.to_string();
        Ok(())
    }

    /// Text currently shown by the widget.
    ///
    /// Before the first successful mount this is the last seed handed to
    /// `rebuild`, i.e. empty.
    pub fn current_content(&self) -> String {
        match &self.instance {
            Some(instance) => self.backend.read_content(instance),
            None => self.seed.clone(),
        }
    }

    /// Mode the live widget was built for, if one is mounted.
    pub fn mode(&self) -> Option<LanguageMode> {
        self.mode
    }

    pub fn is_mounted(&self) -> bool {
        self.instance.is_some()
    }

    pub fn focus(&self) {
        if let Some(instance) = &self.instance {
            self.backend.focus(instance);
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;
    use crate::PlumeError;
    use crate::language::select_mode;

    /// In-memory widget: the "DOM" is a list of mounted widget ids.
    #[derive(Default)]
    pub(crate) struct MockBackend {
        pub container_present: Cell<bool>,
        pub children: RefCell<Vec<usize>>,
        pub next_id: Cell<usize>,
        pub texts: RefCell<Vec<String>>,
        pub configs: RefCell<Vec<(EditingSetup, Option<Grammar>, bool)>>,
        pub sinks: RefCell<Vec<ChangeSink>>,
        pub focused: Cell<Option<usize>>,
        pub destroyed: RefCell<Vec<usize>>,
    }

    impl MockBackend {
        pub fn new() -> Self {
            let backend = Self::default();
            backend.container_present.set(true);
            backend
        }

        /// Simulate the user typing into widget `id`.
        pub fn type_into(&self, id: usize, text: &str) {
            self.texts.borrow_mut()[id] = text.to_string();
            let sink = self.sinks.borrow()[id].clone();
            sink(text.to_string());
        }
    }

    impl WidgetBackend for Rc<MockBackend> {
        type Container = ();
        type Instance = usize;

        fn locate_container(&self) -> Result<()> {
            if self.container_present.get() {
                Ok(())
            } else {
                Err(PlumeError::DomTargetMissing(".editor".into()))
            }
        }

        fn clear_container(&self, _container: &()) {
            self.children.borrow_mut().clear();
        }

        fn construct(
            &self,
            config: &WidgetConfig<'_>,
            _container: &(),
            on_change: ChangeSink,
        ) -> Result<usize> {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.texts.borrow_mut().push(config.doc.to_string());
            self.configs
                .borrow_mut()
                .push((config.setup, config.grammar, config.line_wrapping));
            self.sinks.borrow_mut().push(on_change);
            self.children.borrow_mut().push(id);
            Ok(id)
        }

        fn read_content(&self, instance: &usize) -> String {
            self.texts.borrow()[*instance].clone()
        }

        fn focus(&self, instance: &usize) {
            self.focused.set(Some(*instance));
        }

        fn destroy(&self, instance: usize) {
            self.destroyed.borrow_mut().push(instance);
        }
    }

    fn host() -> (Rc<MockBackend>, EditorHost<Rc<MockBackend>>, Rc<RefCell<String>>) {
        let backend = Rc::new(MockBackend::new());
        let received = Rc::new(RefCell::new(String::new()));
        let sink_target = received.clone();
        let host = EditorHost::new(
            backend.clone(),
            Rc::new(move |text: String| *sink_target.borrow_mut() = text),
        );
        (backend, host, received)
    }

    #[test]
    fn test_rebuild_replaces_single_instance() {
        let (backend, mut host, _) = host();
        host.rebuild(&select_mode("a.js"), "let x;").unwrap();
        host.rebuild(&select_mode("a.py"), "let x;").unwrap();

        assert_eq!(*backend.children.borrow(), vec![1]);
        assert_eq!(*backend.destroyed.borrow(), vec![0]);
        assert_eq!(host.mode(), Some(select_mode("a.py")));
    }

    #[test]
    fn test_setup_follows_is_code() {
        let (backend, mut host, _) = host();
        host.rebuild(&select_mode("notes.txt"), "").unwrap();
        host.rebuild(&select_mode("notes"), "").unwrap();
        host.rebuild(&select_mode("a.cs"), "").unwrap();

        let configs = backend.configs.borrow();
        assert_eq!(configs[0], (EditingSetup::Minimal, None, true));
        assert_eq!(configs[1], (EditingSetup::Basic, None, true));
        assert_eq!(configs[2], (EditingSetup::Basic, Some(Grammar::CSharp), true));
    }

    #[test]
    fn test_change_events_reach_sink() {
        let (backend, mut host, received) = host();
        host.rebuild(&select_mode("a.md"), "# hi").unwrap();
        backend.type_into(0, "# hello");

        assert_eq!(*received.borrow(), "# hello");
        assert_eq!(host.current_content(), "# hello");
    }

    #[test]
    fn test_missing_container_keeps_current_widget() {
        let (backend, mut host, _) = host();
        host.rebuild(&select_mode("a.js"), "keep").unwrap();
        backend.container_present.set(false);

        let err = host.rebuild(&select_mode("a.py"), "keep").unwrap_err();
        assert_eq!(err, PlumeError::DomTargetMissing(".editor".into()));
        assert!(host.is_mounted());
        assert_eq!(host.mode(), Some(select_mode("a.js")));
        assert!(backend.destroyed.borrow().is_empty());
    }

    #[test]
    fn test_unmounted_host_reports_seed_and_ignores_focus() {
        let (backend, host, _) = host();
        assert_eq!(host.current_content(), "");
        host.focus();
        assert_eq!(backend.focused.get(), None);
    }

    #[test]
    fn test_focus_targets_live_instance() {
        let (backend, mut host, _) = host();
        host.rebuild(&select_mode("a.js"), "").unwrap();
        host.rebuild(&select_mode("a.ts"), "").unwrap();
        host.focus();
        assert_eq!(backend.focused.get(), Some(1));
    }
}
