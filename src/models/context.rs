use serde::Serialize;

/// Foreground application context captured when the dialog opens.
/// Both fields may be empty; they are copied into the log verbatim.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ActiveContext {
    pub app_name: String,
    pub window_title: String,
}

impl ActiveContext {
    pub fn new(app_name: impl Into<String>, window_title: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            window_title: window_title.into(),
        }
    }
}
