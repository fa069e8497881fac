use dioxus::prelude::*;
use gloo_storage::{LocalStorage, Storage};

use crate::model::auth::SessionDto;

pub const TOKEN_KEY: &str = "app_token";
pub const USER_ID_KEY: &str = "id";

/// The persisted login session. Present exactly when a non-empty bearer
/// token is in storage; the client does no expiry or signature checks, a
/// 401 from the backend is the only expiry signal.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub user_id: String,
}

impl From<SessionDto> for Session {
    fn from(dto: SessionDto) -> Self {
        Session {
            token: dto.token,
            user_id: dto.id,
        }
    }
}

impl Session {
    pub fn load() -> Option<Session> {
        let token: String = LocalStorage::get(TOKEN_KEY).ok()?;
        if token.is_empty() {
            return None;
        }
        let user_id: String = LocalStorage::get(USER_ID_KEY).unwrap_or_default();
        Some(Session { token, user_id })
    }

    pub fn store(&self) {
        LocalStorage::set(TOKEN_KEY, &self.token).ok();
        LocalStorage::set(USER_ID_KEY, &self.user_id).ok();
    }

    pub fn clear() {
        LocalStorage::delete(TOKEN_KEY);
        LocalStorage::delete(USER_ID_KEY);
    }
}

/// Context handle for the session, readable anywhere in the tree.
/// Writes only happen through [`SessionContext::complete_login`] and
/// [`SessionContext::logout`], both user-triggered.
#[derive(Clone, Copy)]
pub struct SessionContext {
    inner: Signal<Option<Session>>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            inner: Signal::new(Session::load()),
        }
    }

    pub fn current(&self) -> Option<Session> {
        self.inner.read().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.inner.read().as_ref().map(|session| session.token.clone())
    }

    pub fn is_present(&self) -> bool {
        self.inner.read().is_some()
    }

    /// Persist the token and user id delivered by the OAuth callback.
    pub fn complete_login(&mut self, dto: SessionDto) {
        let session = Session::from(dto);
        session.store();
        self.inner.set(Some(session));
    }

    /// Drop the persisted session and reload the page so every piece of
    /// in-memory state resets to anonymous.
    pub fn logout(&mut self) {
        Session::clear();
        self.inner.set(None);
        gloo_utils::window().location().reload().ok();
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn callback_dto_round_trips_into_session() {
        let dto = SessionDto {
            token: "opaque-bearer".to_string(),
            id: "1048293".to_string(),
        };
        let session = Session::from(dto.clone());
        assert_eq!(session.token, dto.token);
        assert_eq!(session.user_id, dto.id);
    }
}
