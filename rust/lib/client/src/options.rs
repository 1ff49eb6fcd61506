/// Per-call notification behavior.
///
/// Each call site may opt out of the automatic error toast (for inline
/// handling of expected failures) or opt into a success toast with an
/// optional custom message.
#[derive(Debug, Clone)]
pub struct CallOptions {
    /// Show an error toast when the call fails. Default `true`.
    pub show_error_message: bool,

    /// Show a success toast on business success. Default `false`.
    pub show_success_message: bool,

    /// Custom success message; wins over the server's message.
    pub success_message: Option<String>,
}

impl Default for CallOptions {
    fn default() -> Self {
        Self {
            show_error_message: true,
            show_success_message: false,
            success_message: None,
        }
    }
}

impl CallOptions {
    /// Options that toast the given message on success.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            show_success_message: true,
            success_message: Some(message.into()),
            ..Self::default()
        }
    }

    /// Suppress the automatic error toast.
    pub fn silent(mut self) -> Self {
        self.show_error_message = false;
        self
    }
}
