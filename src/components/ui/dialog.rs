use crate::app_lib::AppError;
use tracing::warn;

/// Surfaces a failed submission through the browser's blocking `alert()`.
pub fn show_error_dialog(err: &AppError) {
    let Some(window) = web_sys::window() else {
        warn!("No window available to show error dialog");
        return;
    };
    if window.alert_with_message(&err.to_string()).is_err() {
        warn!("Browser refused to show error dialog");
    }
}
