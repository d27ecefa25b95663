//! Account service - registration and credential checks.

use async_trait::async_trait;
use std::sync::Arc;
use validator::Validate;

use crate::domain::{AuthenticatedUser, Password, Registration, User};
use crate::errors::{format_validation_errors, AppError, AppResult};
use crate::infra::UnitOfWork;

/// Well-formed Argon2id hash that matches no password. Verified against when
/// the username is unknown so both failure paths cost one Argon2 run.
const DUMMY_PASSWORD_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHRzb21lc2FsdA$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

/// Account service trait for dependency injection.
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Register a new user.
    ///
    /// # Errors
    /// `Validation` for an empty username, a password under 9 characters or
    /// a malformed email; `Conflict` when the username or email is taken.
    async fn register(&self, username: String, email: String, password: String)
        -> AppResult<User>;

    /// Check credentials and return the signed-in user.
    ///
    /// Unknown usernames and wrong passwords both yield `InvalidCredentials`.
    async fn authenticate(&self, username: String, password: String)
        -> AppResult<AuthenticatedUser>;
}

/// Concrete implementation of AccountService using Unit of Work.
pub struct UserAccount<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> UserAccount<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> AccountService for UserAccount<U> {
    async fn register(
        &self,
        username: String,
        email: String,
        password: String,
    ) -> AppResult<User> {
        let registration = Registration::new(username, email, password);
        if let Err(errors) = registration.validate() {
            let message = format_validation_errors(&errors);
            tracing::warn!("Registration rejected: {}", message);
            return Err(AppError::validation(message));
        }

        let users = self.uow.users();
        if users
            .find_by_username_or_email(&registration.username, &registration.email)
            .await?
            .is_some()
        {
            tracing::warn!(username = %registration.username, "Username or email already taken");
            return Err(AppError::conflict("User"));
        }

        let password_hash = Password::new(&registration.password)?.into_string();
        // The unique indexes catch a concurrent registration that slipped past the check above
        let user = users
            .create(registration.username, registration.email, password_hash)
            .await?;

        tracing::info!(user_id = user.id, "User registered");
        Ok(user)
    }

    async fn authenticate(
        &self,
        username: String,
        password: String,
    ) -> AppResult<AuthenticatedUser> {
        let found = self.uow.users().find_by_username(&username).await?;

        let stored = match &found {
            Some(user) => Password::from_hash(user.password_hash.clone()),
            None => Password::from_hash(DUMMY_PASSWORD_HASH.to_string()),
        };
        let password_valid = stored.verify(&password);

        match found {
            Some(user) if password_valid => {
                tracing::debug!(user_id = user.id, "User authenticated");
                Ok(AuthenticatedUser::from(user))
            }
            _ => Err(AppError::InvalidCredentials),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::repositories::MockUserRepository;
    use crate::services::test_support::TestUnitOfWork;
    use mockall::predicate::eq;

    fn stored_user(password: &str) -> User {
        User {
            id: 42,
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: Password::new(password).unwrap().into_string(),
        }
    }

    fn service(repo: MockUserRepository) -> UserAccount<TestUnitOfWork> {
        UserAccount::new(Arc::new(TestUnitOfWork::with_users(repo)))
    }

    #[tokio::test]
    async fn test_register_success_hashes_password() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username_or_email()
            .with(eq("alice"), eq("alice@example.com"))
            .times(1)
            .returning(|_, _| Ok(None));
        repo.expect_create()
            .times(1)
            .returning(|username, email, password_hash| {
                assert!(Password::from_hash(password_hash.clone()).verify("longenough1"));
                Ok(User {
                    id: 1,
                    username,
                    email,
                    password_hash,
                })
            });

        let user = service(repo)
            .register("alice".into(), "alice@example.com".into(), "longenough1".into())
            .await
            .unwrap();

        assert_eq!(user.id, 1);
        assert_ne!(user.password_hash, "longenough1");
    }

    #[tokio::test]
    async fn test_register_rejects_bad_input_without_touching_store() {
        let cases = [
            ("", "alice@example.com", "longenough1"),
            ("alice", "alice@example.com", "short"),
            ("alice", "not-an-email", "longenough1"),
        ];

        for (username, email, password) in cases {
            let mut repo = MockUserRepository::new();
            repo.expect_find_by_username_or_email().times(0);
            repo.expect_create().times(0);

            let result = service(repo)
                .register(username.into(), email.into(), password.into())
                .await;

            assert!(
                matches!(result, Err(AppError::Validation(_))),
                "accepted {:?}",
                (username, email, password)
            );
        }
    }

    #[tokio::test]
    async fn test_register_existing_user_is_conflict() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username_or_email()
            .returning(|_, _| Ok(Some(stored_user("whatever123"))));
        repo.expect_create().times(0);

        let result = service(repo)
            .register("alice".into(), "new@example.com".into(), "longenough1".into())
            .await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_register_race_lost_on_insert_is_conflict() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username_or_email()
            .returning(|_, _| Ok(None));
        repo.expect_create()
            .returning(|_, _, _| Err(AppError::conflict("User")));

        let result = service(repo)
            .register("alice".into(), "alice@example.com".into(), "longenough1".into())
            .await;

        assert!(result.unwrap_err().is_conflict());
    }

    #[tokio::test]
    async fn test_authenticate_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username()
            .with(eq("alice"))
            .returning(|_| Ok(Some(stored_user("longenough1"))));

        let session = service(repo)
            .authenticate("alice".into(), "longenough1".into())
            .await
            .unwrap();

        assert_eq!(session.id(), 42);
        assert_eq!(session.username(), "alice");
        assert_eq!(session.email(), "alice@example.com");
        assert!(session.password_hash().starts_with("$argon2"));
    }

    #[tokio::test]
    async fn test_authenticate_wrong_password() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username()
            .returning(|_| Ok(Some(stored_user("longenough1"))));

        let result = service(repo)
            .authenticate("alice".into(), "longenough2".into())
            .await;

        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_authenticate_unknown_user_same_error() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username().returning(|_| Ok(None));

        let result = service(repo)
            .authenticate("mallory".into(), "longenough1".into())
            .await;

        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[test]
    fn test_dummy_hash_parses() {
        assert!(argon2::PasswordHash::new(DUMMY_PASSWORD_HASH).is_ok());
    }
}
