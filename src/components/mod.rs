//! Shared UI components exported for routes.

mod layout;
pub(crate) mod ui;

pub(crate) use layout::FormLayout;
pub(crate) use ui::{Alert, AlertKind, SubmitButton, show_error_dialog};
