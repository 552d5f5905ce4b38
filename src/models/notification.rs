/// Severity of a toast. Drives the accent colour and the heading label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Warn,
    Error,
}

impl NotificationKind {
    pub fn heading(&self) -> &'static str {
        match self {
            NotificationKind::Info => "Info",
            NotificationKind::Success => "Done",
            NotificationKind::Warn => "Heads up",
            NotificationKind::Error => "Error",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            NotificationKind::Info => "toast-info",
            NotificationKind::Success => "toast-success",
            NotificationKind::Warn => "toast-warn",
            NotificationKind::Error => "toast-error",
        }
    }
}

/// A short-lived status message. Each one evicts itself on its own timer.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u32,
    pub message: String,
    pub kind: NotificationKind,
}
