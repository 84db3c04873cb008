//! 快照文件存储实现
//!
//! 三个聚合（用户表、提交列表、场次列表）常驻内存，整体置于一把读写锁之后；
//! 每次变更操作在持有写锁期间完成"检查-写入-落盘"全过程，因此重复用户名检查、
//! 场次冲突扫描等先检查后写入的序列在并发调用下仍然原子。
//! 持久化为单个 JSON 快照文件，每次保存整体覆盖。

mod sessions;
mod snapshot;
mod submissions;
mod users;

use std::path::PathBuf;

use tokio::sync::RwLock;
use tracing::{error, info};

use crate::config::AppConfig;
use crate::errors::Result;
use snapshot::SnapshotState;

/// 快照存储实例
pub struct SnapshotStorage {
    pub(crate) state: RwLock<SnapshotState>,
    pub(crate) path: PathBuf,
}

impl SnapshotStorage {
    /// 创建新的快照存储实例（路径来自配置）
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let storage = Self::new_with_path(PathBuf::from(&config.snapshot.path))?;
        info!("快照存储初始化完成，数据文件: {}", config.snapshot.path);
        Ok(storage)
    }

    /// 以指定文件路径创建存储实例，加载现有快照或回退到引导状态
    pub fn new_with_path(path: PathBuf) -> Result<Self> {
        let state = snapshot::load_or_bootstrap(&path)?;
        Ok(Self {
            state: RwLock::new(state),
            path,
        })
    }

    /// 保存快照；保存失败只记录日志，不回滚内存状态
    pub(crate) fn persist(&self, state: &SnapshotState) {
        if let Err(e) = snapshot::save_state(&self.path, state) {
            error!("快照保存失败（内存状态已更新，未回滚）: {}", e);
        }
    }
}

// Storage trait 实现
use chrono::{DateTime, NaiveDate, Utc};

use crate::models::{
    sessions::{entities::Session, requests::CreateSessionRequest},
    submissions::{
        entities::Submission,
        requests::{CreateSubmissionRequest, GradeSubmissionRequest},
    },
    users::{
        entities::{User, UserRole},
        requests::RegisterUserRequest,
    },
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SnapshotStorage {
    // 用户目录
    async fn register_user(&self, req: RegisterUserRequest) -> Result<User> {
        self.register_user_impl(req).await
    }

    async fn authenticate_user(&self, username: &str, password: &str) -> Result<UserRole> {
        self.authenticate_user_impl(username, password).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        self.list_users_impl().await
    }

    async fn list_usernames_by_role(&self, role: UserRole) -> Result<Vec<String>> {
        self.list_usernames_by_role_impl(role).await
    }

    async fn update_last_login(&self, username: &str) -> Result<bool> {
        self.update_last_login_impl(username).await
    }

    // 场次注册表
    async fn create_session(
        &self,
        req: CreateSessionRequest,
        now: DateTime<Utc>,
    ) -> Result<Session> {
        self.create_session_impl(req, now).await
    }

    async fn get_session_by_id(&self, id: &str) -> Result<Option<Session>> {
        self.get_session_by_id_impl(id).await
    }

    async fn list_sessions(&self) -> Result<Vec<Session>> {
        self.list_sessions_impl().await
    }

    async fn list_open_sessions(&self, as_of: DateTime<Utc>) -> Result<Vec<Session>> {
        self.list_open_sessions_impl(as_of).await
    }

    // 提交台账
    async fn create_submission(
        &self,
        owner: &str,
        req: CreateSubmissionRequest,
        today: NaiveDate,
    ) -> Result<Submission> {
        self.create_submission_impl(owner, req, today).await
    }

    async fn grade_submission(&self, req: GradeSubmissionRequest) -> Result<Submission> {
        self.grade_submission_impl(req).await
    }

    async fn list_submissions(&self) -> Result<Vec<Submission>> {
        self.list_submissions_impl().await
    }

    async fn list_submissions_by_owner(&self, owner: &str) -> Result<Vec<Submission>> {
        self.list_submissions_by_owner_impl(owner).await
    }

    async fn list_submissions_assigned_to(&self, evaluator: &str) -> Result<Vec<Submission>> {
        self.list_submissions_assigned_to_impl(evaluator).await
    }

    async fn get_submission(&self, owner: &str, title: &str) -> Result<Option<Submission>> {
        self.get_submission_impl(owner, title).await
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::SnapshotStorage;
    use tempfile::TempDir;

    // 每个测试使用独立的临时快照文件，加载时自动进入引导状态
    pub(crate) fn test_storage() -> (SnapshotStorage, TempDir) {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("seminar_data.json");
        let storage = SnapshotStorage::new_with_path(path).expect("create snapshot storage");
        (storage, dir)
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::test_storage;
    use super::*;
    use crate::models::sessions::entities::PresentationType;

    // 每次变更后整体落盘：换一个实例从同一文件加载，状态应完整可见
    #[tokio::test]
    async fn test_mutations_survive_reload() {
        let (storage, _dir) = test_storage();
        let now: DateTime<Utc> = "2025-06-01T10:00:00Z".parse().unwrap();

        storage
            .register_user_impl(RegisterUserRequest {
                username: "alice".to_string(),
                password: "pw".to_string(),
                role: UserRole::Student,
            })
            .await
            .unwrap();
        storage
            .create_session_impl(
                CreateSessionRequest {
                    scheduled_at: now + chrono::Duration::hours(1),
                    venue: "V1".to_string(),
                    presentation_type: PresentationType::Oral,
                    evaluator: "eval1".to_string(),
                },
                now,
            )
            .await
            .unwrap();
        storage
            .create_submission_impl(
                "alice",
                CreateSubmissionRequest {
                    title: "Quantum Widgets".to_string(),
                    presentation_type: PresentationType::Oral,
                    session_id: "S001".to_string(),
                    abstract_text: "Abstract.".to_string(),
                    supervisor_name: "Dr. Smith".to_string(),
                    attachment_ref: "/files/widgets.pdf".to_string(),
                },
                now.date_naive(),
            )
            .await
            .unwrap();

        let reloaded = SnapshotStorage::new_with_path(storage.path.clone()).unwrap();
        let role = reloaded
            .authenticate_user_impl("alice", "pw")
            .await
            .unwrap();
        assert_eq!(role, UserRole::Student);
        assert!(
            reloaded
                .get_session_by_id_impl("S001")
                .await
                .unwrap()
                .is_some()
        );
        let subs = reloaded.list_submissions_impl().await.unwrap();
        assert_eq!(subs.len(), 1);
        assert_eq!(subs[0].session_id, "S001");
    }
}
