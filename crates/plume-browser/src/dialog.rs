//! User-facing error reporting.

use plume_core::PlumeError;

/// Tell the user an action failed.
///
/// Cancellations are only logged. Everything else is logged and shown in
/// an alert; nothing is retried.
pub fn report_error(action: &str, err: &PlumeError) {
    if err.is_cancellation() {
        tracing::debug!("{} cancelled", action);
        return;
    }

    tracing::error!("{} failed: {}", action, err);
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(&format!("{action} failed: {err}")) {
            tracing::warn!("Could not show alert: {:?}", e);
        }
    }
}
