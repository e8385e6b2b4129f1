//! User accounts.
//!
//! The external auth shim performs get-or-create-by-email logins; the full
//! contract it needs from this repository is `create_user` plus
//! `get_user_by_email`.

use crate::errors::Result;
use crate::models::{User, UserRole};
use crate::store::{Store, collections, new_record_id};
use chrono::Utc;
use tracing::{info, instrument};

/// Caller-supplied fields for a new user account.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
}

/// Registers a user and returns the stored record.
///
/// # Errors
///
/// Returns `Error::DuplicateKey` if a user with the same email already
/// exists, and engine errors unchanged.
#[instrument(skip(store, input), fields(email = %input.email))]
pub async fn create_user(store: &Store, input: NewUser) -> Result<User> {
    let user = User {
        id: new_record_id(),
        email: input.email,
        name: input.name,
        role: input.role,
        phone: input.phone,
        avatar_url: input.avatar_url,
        created_at: Utc::now(),
    };
    store.insert(collections::USERS, &user).await?;
    info!("Created user {} ({})", user.id, user.email);
    Ok(user)
}

/// Looks a user up by id.
///
/// # Errors
///
/// Propagates engine errors unchanged.
pub async fn get_user(store: &Store, id: &str) -> Result<Option<User>> {
    store.get_by_id(collections::USERS, id).await
}

/// Looks a user up by their unique email.
///
/// # Errors
///
/// Propagates engine errors unchanged.
pub async fn get_user_by_email(store: &Store, email: &str) -> Result<Option<User>> {
    let mut users: Vec<User> = store
        .get_by_index(collections::USERS, "email", email)
        .await?;
    Ok(users.pop())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_utils::{init_test_tracing, setup_test_store};
    use crate::errors::Error;

    fn planner(email: &str) -> NewUser {
        NewUser {
            email: email.to_string(),
            name: "Demo Planner".to_string(),
            role: UserRole::Planner,
            phone: None,
            avatar_url: None,
        }
    }

    #[tokio::test]
    async fn create_user_generates_id_and_timestamp() {
        init_test_tracing();
        let store = setup_test_store().await.unwrap();

        let before = Utc::now();
        let user = create_user(&store, planner("ada@example.com")).await.unwrap();

        assert!(!user.id.is_empty());
        assert!(user.created_at >= before && user.created_at <= Utc::now());
    }

    #[tokio::test]
    async fn lookup_by_email_supports_get_or_create_logins() {
        init_test_tracing();
        let store = setup_test_store().await.unwrap();

        assert!(
            get_user_by_email(&store, "ada@example.com")
                .await
                .unwrap()
                .is_none()
        );

        let created = create_user(&store, planner("ada@example.com")).await.unwrap();
        let found = get_user_by_email(&store, "ada@example.com")
            .await
            .unwrap()
            .expect("user should be found by email");
        assert_eq!(found, created);

        let by_id = get_user(&store, &created.id).await.unwrap();
        assert_eq!(by_id, Some(created));
    }

    #[tokio::test]
    async fn second_user_with_same_email_is_rejected() {
        init_test_tracing();
        let store = setup_test_store().await.unwrap();

        create_user(&store, planner("ada@example.com")).await.unwrap();
        let err = create_user(&store, planner("ada@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateKey { .. }), "got {err:?}");
    }
}
