//! ==============================================================================
//! fetch.rs - per-view request state
//! ==============================================================================
//!
//! purpose:
//!     each view walks idle -> loading -> {loaded, failed} and back to loading
//!     whenever one of its inputs changes. `RequestSeq` lets a view drop
//!     responses that arrive after a newer request was started.
//!
//! ==============================================================================

/// lifecycle of one remote read
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Idle
    }
}

impl<T> FetchState<T> {
    pub fn loaded(&self) -> Option<&T> {
        match self {
            FetchState::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

/// handle for one started request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// monotonically numbered requests, only the newest one is current
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestSeq {
    latest: u64,
}

impl RequestSeq {
    pub fn begin(&mut self) -> RequestTicket {
        self.latest += 1;
        RequestTicket(self.latest)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_loaded_state_exposes_value() {
        let idle: FetchState<u32> = FetchState::default();
        assert_eq!(idle, FetchState::Idle);
        assert_eq!(idle.loaded(), None);

        assert_eq!(FetchState::<u32>::Loading.loaded(), None);
        assert_eq!(FetchState::<u32>::Failed("boom".into()).loaded(), None);
        assert_eq!(FetchState::Loaded(7).loaded(), Some(&7));
    }

    #[test]
    fn test_only_newest_ticket_is_current() {
        let mut seq = RequestSeq::default();
        let first = seq.begin();
        assert!(seq.is_current(first));

        let second = seq.begin();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }
}
