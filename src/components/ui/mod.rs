mod alert;
mod button;
mod dialog;

pub(crate) use alert::{Alert, AlertKind};
pub(crate) use button::SubmitButton;
pub(crate) use dialog::show_error_dialog;
