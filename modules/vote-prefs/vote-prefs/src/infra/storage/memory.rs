//! Process-local user store.

use std::collections::HashMap;

use api_auth_sdk::{LookupError, User, UserDirectory};
use async_trait::async_trait;
use parking_lot::RwLock;
use vsp_security::UserId;

use crate::config::SeedUser;
use crate::domain::repo::VoteBitsRepository;

/// Users held in memory behind a single lock.
///
/// Every vote bits write happens under the write lock, so concurrent
/// updates to the same user never interleave.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_seed(seed: impl IntoIterator<Item = SeedUser>) -> Self {
        let users = seed
            .into_iter()
            .map(|s| {
                let id = UserId::new(s.id);
                (
                    id,
                    User {
                        id,
                        multisig_address: s.multisig_address,
                        vote_bits: s.vote_bits,
                    },
                )
            })
            .collect();
        Self {
            users: RwLock::new(users),
        }
    }

    /// Insert or replace a user.
    pub fn insert(&self, user: User) {
        self.users.write().insert(user.id, user);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.users.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.read().is_empty()
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserStore {
    async fn find_by_id(&self, id: UserId) -> Result<User, LookupError> {
        self.users.read().get(&id).cloned().ok_or(LookupError::NotFound)
    }

    async fn find_by_multisig_address(&self, address: &str) -> Result<User, LookupError> {
        self.users
            .read()
            .values()
            .find(|u| u.multisig_address.as_deref() == Some(address))
            .cloned()
            .ok_or(LookupError::NotFound)
    }
}

#[async_trait]
impl VoteBitsRepository for InMemoryUserStore {
    async fn set_vote_bits(&self, user: UserId, vote_bits: u16) -> Result<u16, LookupError> {
        let mut users = self.users.write();
        let stored = users.get_mut(&user).ok_or(LookupError::NotFound)?;
        Ok(std::mem::replace(&mut stored.vote_bits, vote_bits))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn user(id: i64, address: Option<&str>) -> User {
        User {
            id: UserId::new(id),
            multisig_address: address.map(ToOwned::to_owned),
            vote_bits: 1,
        }
    }

    #[tokio::test]
    async fn lookups_by_id_and_address() {
        let store = InMemoryUserStore::new();
        store.insert(user(1, Some("DcOne")));
        store.insert(user(2, None));

        assert_eq!(store.len(), 2);
        assert_eq!(store.find_by_id(UserId::new(2)).await.unwrap().id, UserId::new(2));
        assert_eq!(
            store.find_by_multisig_address("DcOne").await.unwrap().id,
            UserId::new(1)
        );
        assert_eq!(
            store.find_by_multisig_address("DcTwo").await,
            Err(LookupError::NotFound)
        );
        assert_eq!(store.find_by_id(UserId::new(3)).await, Err(LookupError::NotFound));
    }

    #[tokio::test]
    async fn set_returns_previous_value() {
        let store = InMemoryUserStore::new();
        store.insert(user(1, None));

        assert_eq!(store.set_vote_bits(UserId::new(1), 5).await, Ok(1));
        assert_eq!(store.set_vote_bits(UserId::new(1), 3).await, Ok(5));
        assert_eq!(
            store.set_vote_bits(UserId::new(9), 3).await,
            Err(LookupError::NotFound)
        );
    }

    #[tokio::test]
    async fn concurrent_writes_form_a_chain() {
        let store = Arc::new(InMemoryUserStore::new());
        store.insert(user(1, None));

        let tasks: Vec<_> = (0..32u16)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.set_vote_bits(UserId::new(1), 100 + i).await })
            })
            .collect();

        let mut previous = Vec::new();
        for task in tasks {
            previous.push(task.await.unwrap().unwrap());
        }

        // Each value is observed as "previous" at most once.
        previous.sort_unstable();
        previous.dedup();
        assert_eq!(previous.len(), 32);
    }
}
