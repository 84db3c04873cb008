//! 用户目录聚合

use super::SnapshotStorage;
use super::snapshot::UserRecord;
use crate::errors::{Result, SeminarError};
use crate::models::users::entities::{User, UserRole};
use crate::models::users::requests::RegisterUserRequest;
use crate::utils::password::{hash_password, verify_password};
use crate::utils::validate::{validate_password, validate_username};

impl SnapshotStorage {
    pub(crate) async fn register_user_impl(&self, req: RegisterUserRequest) -> Result<User> {
        validate_username(&req.username).map_err(SeminarError::validation)?;
        validate_password(&req.password).map_err(SeminarError::validation)?;

        // 唯一性检查与插入在同一把写锁内完成
        let mut state = self.state.write().await;
        if state.users.contains_key(&req.username) {
            return Err(SeminarError::duplicate_user(format!(
                "Username '{}' already exists",
                req.username
            )));
        }

        let user = User {
            username: req.username.clone(),
            password_hash: hash_password(&req.password)?,
            role: req.role,
            created_at: chrono::Utc::now(),
            last_login: None,
        };
        state
            .users
            .insert(req.username, UserRecord::from(user.clone()));
        self.persist(&state);
        Ok(user)
    }

    pub(crate) async fn authenticate_user_impl(
        &self,
        username: &str,
        password: &str,
    ) -> Result<UserRole> {
        let state = self.state.read().await;
        let record = state
            .users
            .get(username)
            .ok_or_else(|| SeminarError::user_not_found(format!("User '{username}' not found")))?;
        if !verify_password(password, &record.password_hash) {
            return Err(SeminarError::bad_credential(format!(
                "Incorrect password for user '{username}'"
            )));
        }
        Ok(record.role.clone())
    }

    pub(crate) async fn get_user_by_username_impl(&self, username: &str) -> Result<Option<User>> {
        let state = self.state.read().await;
        Ok(state.users.get(username).cloned().map(User::from))
    }

    pub(crate) async fn list_users_impl(&self) -> Result<Vec<User>> {
        let state = self.state.read().await;
        let mut users: Vec<User> = state.users.values().cloned().map(User::from).collect();
        // 用户表以 HashMap 存储，按用户名排序保证输出稳定
        users.sort_by(|a, b| a.username.cmp(&b.username));
        Ok(users)
    }

    pub(crate) async fn list_usernames_by_role_impl(&self, role: UserRole) -> Result<Vec<String>> {
        let state = self.state.read().await;
        let mut usernames: Vec<String> = state
            .users
            .values()
            .filter(|u| u.role == role)
            .map(|u| u.username.clone())
            .collect();
        usernames.sort();
        Ok(usernames)
    }

    pub(crate) async fn update_last_login_impl(&self, username: &str) -> Result<bool> {
        let mut state = self.state.write().await;
        let updated = match state.users.get_mut(username) {
            Some(record) => {
                record.last_login = Some(chrono::Utc::now());
                true
            }
            None => false,
        };
        if updated {
            self.persist(&state);
        }
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::snapshot_storage::test_support::test_storage;

    fn register_req(username: &str, password: &str, role: UserRole) -> RegisterUserRequest {
        RegisterUserRequest {
            username: username.to_string(),
            password: password.to_string(),
            role,
        }
    }

    #[tokio::test]
    async fn test_register_then_authenticate() {
        let (storage, _dir) = test_storage();

        storage
            .register_user_impl(register_req("alice", "pw", UserRole::Student))
            .await
            .unwrap();

        let role = storage.authenticate_user_impl("alice", "pw").await.unwrap();
        assert_eq!(role, UserRole::Student);

        let err = storage
            .authenticate_user_impl("alice", "wrong")
            .await
            .unwrap_err();
        assert!(matches!(err, SeminarError::BadCredential(_)));
    }

    #[tokio::test]
    async fn test_authenticate_unknown_user() {
        let (storage, _dir) = test_storage();
        let err = storage
            .authenticate_user_impl("nobody", "pw")
            .await
            .unwrap_err();
        assert!(matches!(err, SeminarError::UserNotFound(_)));
    }

    #[tokio::test]
    async fn test_register_duplicate_username() {
        let (storage, _dir) = test_storage();
        storage
            .register_user_impl(register_req("alice", "pw", UserRole::Student))
            .await
            .unwrap();
        let err = storage
            .register_user_impl(register_req("alice", "other", UserRole::Evaluator))
            .await
            .unwrap_err();
        assert!(matches!(err, SeminarError::DuplicateUser(_)));
    }

    #[tokio::test]
    async fn test_register_rejects_empty_fields() {
        let (storage, _dir) = test_storage();
        let err = storage
            .register_user_impl(register_req("", "pw", UserRole::Student))
            .await
            .unwrap_err();
        assert!(matches!(err, SeminarError::Validation(_)));

        let err = storage
            .register_user_impl(register_req("bob", "", UserRole::Student))
            .await
            .unwrap_err();
        assert!(matches!(err, SeminarError::Validation(_)));
    }

    #[tokio::test]
    async fn test_bootstrap_seed_users_can_authenticate() {
        let (storage, _dir) = test_storage();
        let role = storage
            .authenticate_user_impl("coord1", "pass")
            .await
            .unwrap();
        assert_eq!(role, UserRole::Coordinator);
    }

    #[tokio::test]
    async fn test_list_usernames_by_role() {
        let (storage, _dir) = test_storage();
        storage
            .register_user_impl(register_req("eval2", "pw", UserRole::Evaluator))
            .await
            .unwrap();

        let evaluators = storage
            .list_usernames_by_role_impl(UserRole::Evaluator)
            .await
            .unwrap();
        assert_eq!(evaluators, vec!["eval1".to_string(), "eval2".to_string()]);
    }
}
