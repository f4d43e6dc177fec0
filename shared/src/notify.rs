//! ==============================================================================
//! notify.rs - toast queue
//! ==============================================================================
//!
//! purpose:
//!     bookkeeping behind the dashboard's toast stack. the dashboard renders
//!     the queue and arms a timer for every toast flagged `auto_dismiss`.
//!
//! ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Appearance {
    Error,
    Success,
}

impl Appearance {
    pub fn class(self) -> &'static str {
        match self {
            Appearance::Error => "toast error",
            Appearance::Success => "toast success",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub appearance: Appearance,
    /// false keeps the toast until the user closes it
    pub auto_dismiss: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    /// returns the id to dismiss it with
    pub fn push(&mut self, message: impl Into<String>, appearance: Appearance, auto_dismiss: bool) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            message: message.into(),
            appearance,
            auto_dismiss,
        });
        id
    }

    /// no-op when the toast is already gone
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

// ==============================================================================
// tests
// ==============================================================================
