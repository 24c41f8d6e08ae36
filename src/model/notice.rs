#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient feedback line. Each owner keeps at most one and replaces it on
/// every new outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusNotice {
    pub kind: NoticeKind,
    pub message: String,
}

impl StatusNotice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}
