//! Bearer-credential holder.

use std::sync::{Arc, RwLock};

/// Opaque token source scoped to one authenticated user.
///
/// Cloning shares the underlying slot, so the HTTP client and the shell
/// that drives login/logout see the same credential.
#[derive(Debug, Clone, Default)]
pub struct Session {
    token: Arc<RwLock<Option<String>>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_token(&self, token: impl Into<String>) {
        *self.token.write().expect("session lock poisoned") = Some(token.into());
    }

    pub fn clear(&self) {
        *self.token.write().expect("session lock poisoned") = None;
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().expect("session lock poisoned").clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.read().expect("session lock poisoned").is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_credential_slot() {
        let session = Session::new();
        let shared = session.clone();

        session.set_token("abc");
        assert!(shared.is_authenticated());
        assert_eq!(shared.token().as_deref(), Some("abc"));

        shared.clear();
        assert!(!session.is_authenticated());
    }
}
