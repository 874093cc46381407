/// Failure of a save or load call. `Display` is the exact text shown to
/// the user as a transient notification; transport details are kept for
/// logs only.
#[derive(Debug)]
pub enum PersistenceError {
    /// Network unreachable or malformed response. The user sees the
    /// generic per-operation message, not the transport detail.
    Transport { message: String, detail: String },
    /// Non-2xx response with a structured message, shown verbatim.
    Service { status: u16, message: String },
}

impl PersistenceError {
    pub(crate) fn transport(message: &str, detail: String) -> Self {
        Self::Transport {
            message: message.to_string(),
            detail,
        }
    }

    /// The notification text.
    pub fn message(&self) -> &str {
        match self {
            Self::Transport { message, .. } => message,
            Self::Service { message, .. } => message,
        }
    }
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for PersistenceError {}
