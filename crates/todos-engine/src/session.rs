//! Per-session state
//!
//! A `Session` lives as long as the client's session; the request layer
//! takes it by `&mut`, so requests of one session never interleave.

use serde::{Deserialize, Serialize};
use todos_core::ops::SessionData;
use todos_core_types::SessionId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashKind {
    Info,
    Success,
    Error,
}

/// One-shot message shown on the next rendered view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub kind: FlashKind,
    pub message: String,
}

impl Flash {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            message: message.into(),
        }
    }
}

/// Authentication and flash state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub username: Option<String>,
    pub signed_in: bool,
    pub flash: Vec<Flash>,
}

impl SessionState {
    /// The signed-in owner, if any
    pub fn owner(&self) -> Option<&str> {
        if self.signed_in {
            self.username.as_deref()
        } else {
            None
        }
    }

    pub fn push_flash(&mut self, flash: Flash) {
        self.flash.push(flash);
    }

    /// Take all pending flash messages, leaving none behind
    pub fn drain_flash(&mut self) -> Vec<Flash> {
        std::mem::take(&mut self.flash)
    }

    pub fn sign_in(&mut self, username: impl Into<String>) {
        self.username = Some(username.into());
        self.signed_in = true;
    }

    pub fn sign_out(&mut self) {
        self.username = None;
        self.signed_in = false;
    }
}

/// Everything kept between requests of one client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    pub state: SessionState,
    /// Storage for the session-memory backend; unused by the relational one
    pub data: SessionData,
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: SessionId::new(),
            state: SessionState::default(),
            data: SessionData::new(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_requires_signed_in() {
        let mut state = SessionState {
            username: Some("alice".to_string()),
            ..Default::default()
        };
        assert_eq!(state.owner(), None);

        state.sign_in("alice");
        assert_eq!(state.owner(), Some("alice"));

        state.sign_out();
        assert_eq!(state.owner(), None);
        assert_eq!(state.username, None);
    }

    #[test]
    fn test_drain_flash_empties_queue() {
        let mut state = SessionState::default();
        state.push_flash(Flash::success("Welcome!"));

        assert_eq!(state.drain_flash(), vec![Flash::success("Welcome!")]);
        assert!(state.drain_flash().is_empty());
    }

    #[test]
    fn test_session_round_trips_through_json() {
        let mut session = Session::new();
        session.state.sign_in("alice");

        let json = serde_json::to_string(&session).unwrap();
        let restored: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.id, session.id);
        assert_eq!(restored.state, session.state);
    }
}
