/// Two-step yes/no gate in front of a destructive action.
///
/// The gate only holds the target awaiting confirmation. `confirm` hands the
/// target back and closes the gate in the same step, so one opening can yield
/// at most one confirmation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfirmationGate<T> {
    Closed,
    Pending { target: T, prompt: String },
}

impl<T> Default for ConfirmationGate<T> {
    fn default() -> Self {
        Self::Closed
    }
}

impl<T> ConfirmationGate<T> {
    /// Opens the gate for `target`, replacing any earlier pending target.
    pub fn open(&mut self, target: T, prompt: impl Into<String>) {
        *self = Self::Pending {
            target,
            prompt: prompt.into(),
        };
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }

    pub fn pending(&self) -> Option<&T> {
        match self {
            Self::Pending { target, .. } => Some(target),
            Self::Closed => None,
        }
    }

    pub fn prompt(&self) -> Option<&str> {
        match self {
            Self::Pending { prompt, .. } => Some(prompt.as_str()),
            Self::Closed => None,
        }
    }

    pub fn confirm(&mut self) -> Option<T> {
        match std::mem::take(self) {
            Self::Pending { target, .. } => Some(target),
            Self::Closed => None,
        }
    }

    pub fn dismiss(&mut self) {
        *self = Self::Closed;
    }
}

#[cfg(test)]
#[path = "tests/gate_tests.rs"]
mod tests;
