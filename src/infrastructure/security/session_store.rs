use crate::application::ApplicationResult;
use crate::application::ports::session_revocation::SessionRevocationStore;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// Process-local revocation list. Sessions are tracked per user so a
/// deactivation can invalidate every outstanding token at once.
#[derive(Default)]
pub struct InMemorySessionRevocationStore {
    revoked: Mutex<HashSet<String>>,
    by_user: Mutex<HashMap<i64, HashSet<String>>>,
}

impl InMemorySessionRevocationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRevocationStore for InMemorySessionRevocationStore {
    async fn is_revoked(&self, session_id: &str) -> ApplicationResult<bool> {
        let guard = self.revoked.lock().unwrap();
        Ok(guard.contains(session_id))
    }

    async fn revoke(&self, session_id: &str) -> ApplicationResult<()> {
        let mut guard = self.revoked.lock().unwrap();
        guard.insert(session_id.to_string());
        Ok(())
    }

    async fn add_session_for_user(
        &self,
        user_id: i64,
        session_id: &str,
    ) -> ApplicationResult<()> {
        let mut guard = self.by_user.lock().unwrap();
        guard
            .entry(user_id)
            .or_default()
            .insert(session_id.to_string());
        Ok(())
    }

    async fn revoke_all_for_user(&self, user_id: i64) -> ApplicationResult<()> {
        let sessions = {
            let mut guard = self.by_user.lock().unwrap();
            guard.remove(&user_id).unwrap_or_default()
        };
        let mut revoked = self.revoked.lock().unwrap();
        revoked.extend(sessions);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn revoking_all_sessions_marks_each_one() {
        let store = InMemorySessionRevocationStore::new();
        store.add_session_for_user(7, "a").await.unwrap();
        store.add_session_for_user(7, "b").await.unwrap();
        store.add_session_for_user(8, "c").await.unwrap();

        store.revoke_all_for_user(7).await.unwrap();

        assert!(store.is_revoked("a").await.unwrap());
        assert!(store.is_revoked("b").await.unwrap());
        assert!(!store.is_revoked("c").await.unwrap());
    }
}
