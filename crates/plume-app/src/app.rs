//! Wires the toolbar, keyboard and editor area to the shell.

use std::future::Future;
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use plume_browser::{
    BrowserFileAccess, BrowserShell, CodeMirrorBackend, Document, FileAccess, PlumeConfig,
    PlumeError, SaveOutcome, report_error, shortcut_from_event,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::toolbar::Toolbar;

/// A mounted editor. Dropping it detaches every listener.
pub struct App {
    controller: Controller,
    _listeners: Vec<EventListener>,
}

impl App {
    pub fn shell(&self) -> &BrowserShell {
        &self.controller.shell
    }
}

#[derive(Clone)]
struct Controller {
    shell: Rc<BrowserShell>,
    toolbar: Rc<Toolbar>,
}

impl Controller {
    /// Run an async shell action, reporting failure and refreshing the toolbar.
    fn run<T, Fut>(&self, action: &'static str, work: Fut)
    where
        Fut: Future<Output = Result<T, PlumeError>> + 'static,
    {
        let controller = self.clone();
        spawn_local(async move {
            if let Err(e) = work.await {
                report_error(action, &e);
            }
            controller.refresh();
        });
    }

    fn refresh(&self) {
        self.toolbar.render(&self.shell.toolbar());
    }

    fn open(&self) {
        let shell = self.shell.clone();
        self.run("Open", async move { shell.open().await });
    }

    fn save(&self) {
        let shell = self.shell.clone();
        self.run("Save", async move { shell.save().await });
    }

    fn save_as(&self) {
        let shell = self.shell.clone();
        self.run("Save As", async move { shell.save_as().await });
    }

    fn download(&self) {
        if let Err(e) = self.shell.download() {
            report_error("Download", &e);
        }
    }

    fn rename(&self) {
        let filename = self.toolbar.filename.value();
        match self.shell.rename(&filename) {
            Ok(()) => {}
            Err(PlumeError::FilenameLocked(current)) => {
                tracing::debug!(%current, "Filename is fixed by the open file handle");
            }
            Err(e) => report_error("Rename", &e),
        }
        self.refresh();
    }

    fn keydown(&self, event: &web_sys::KeyboardEvent) {
        let Some(shortcut) = shortcut_from_event(event) else {
            return;
        };
        let shell = self.shell.clone();
        self.run("Save", async move {
            let outcome = shell.shortcut(shortcut).await?;
            if let SaveOutcome::Downloaded { filename } = &outcome {
                tracing::debug!(%filename, "Shortcut fell back to download");
            }
            Ok(outcome)
        });
    }
}

/// Mount the editor and toolbar described by `config`.
pub fn mount(config: &PlumeConfig) -> Result<App, PlumeError> {
    let files = BrowserFileAccess;
    tracing::info!(capability = ?files.capability(), "Detected file access support");

    let shell = Rc::new(BrowserShell::new(
        files,
        CodeMirrorBackend::new(config.editor_selector.as_str()),
        Document::new(config.default_filename.as_str(), ""),
    ));
    shell.mount()?;

    let toolbar = Rc::new(Toolbar::mount(&config.toolbar_selector)?);
    let controller = Controller { shell, toolbar };
    controller.refresh();

    let editor_area = gloo_utils::document()
        .query_selector(&config.editor_selector)
        .ok()
        .flatten()
        .ok_or_else(|| PlumeError::DomTargetMissing(config.editor_selector.clone()))?;

    let toolbar = &controller.toolbar;
    let listeners = vec![
        on(&toolbar.open, "click", &controller, |c, _| c.open()),
        on(&toolbar.save_as, "click", &controller, |c, _| c.save_as()),
        on(&toolbar.save, "click", &controller, |c, _| c.save()),
        on(&toolbar.download, "click", &controller, |c, _| c.download()),
        on(&toolbar.filename, "input", &controller, |c, _| c.rename()),
        on(&editor_area, "click", &controller, |c, _| c.shell.focus()),
        {
            let controller = controller.clone();
            EventListener::new_with_options(
                &gloo_utils::window(),
                "keydown",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    if let Some(event) = event.dyn_ref::<web_sys::KeyboardEvent>() {
                        controller.keydown(event);
                    }
                },
            )
        },
    ];

    tracing::info!(
        editor = %config.editor_selector,
        toolbar = %config.toolbar_selector,
        "Editor mounted"
    );
    Ok(App {
        controller,
        _listeners: listeners,
    })
}

fn on(
    target: &web_sys::EventTarget,
    event_type: &'static str,
    controller: &Controller,
    handler: impl Fn(&Controller, &web_sys::Event) + 'static,
) -> EventListener {
    let controller = controller.clone();
    EventListener::new(target, event_type, move |event| handler(&controller, event))
}
