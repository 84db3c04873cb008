use std::sync::Arc;

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

use crate::errors::Result;

pub mod snapshot_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户目录方法
    // 注册用户（用户名唯一，注册后不可删除）
    async fn register_user(&self, req: RegisterUserRequest) -> Result<User>;
    // 校验凭据，返回用户角色
    async fn authenticate_user(&self, username: &str, password: &str) -> Result<UserRole>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 列出全部用户
    async fn list_users(&self) -> Result<Vec<User>>;
    // 按角色列出用户名，结果为调用时刻的一致性快照
    async fn list_usernames_by_role(&self, role: UserRole) -> Result<Vec<String>>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, username: &str) -> Result<bool>;

    /// 场次注册表方法
    // 创建场次（冲突扫描 + 过期校验，时钟由调用方注入）
    async fn create_session(&self, req: CreateSessionRequest, now: DateTime<Utc>)
    -> Result<Session>;
    // 通过ID获取场次
    async fn get_session_by_id(&self, id: &str) -> Result<Option<Session>>;
    // 列出全部场次（创建顺序）
    async fn list_sessions(&self) -> Result<Vec<Session>>;
    // 报名池：未被任何提交绑定且开始时间晚于 as_of 的场次
    async fn list_open_sessions(&self, as_of: DateTime<Utc>) -> Result<Vec<Session>>;

    /// 提交台账方法
    // 登记研究提交（必填校验 + 场次绑定 + 类型对齐）
    async fn create_submission(
        &self,
        owner: &str,
        req: CreateSubmissionRequest,
        today: NaiveDate,
    ) -> Result<Submission>;
    // 评分（允许重复评分，直接覆盖）
    async fn grade_submission(&self, req: GradeSubmissionRequest) -> Result<Submission>;
    // 列出全部提交（提交顺序）
    async fn list_submissions(&self) -> Result<Vec<Submission>>;
    // 列出某学生的提交
    async fn list_submissions_by_owner(&self, owner: &str) -> Result<Vec<Submission>>;
    // 列出分配给某评审的提交（按所绑定场次的评审判定）
    async fn list_submissions_assigned_to(&self, evaluator: &str) -> Result<Vec<Submission>>;
    // 按 (owner, title) 查找单条提交
    async fn get_submission(&self, owner: &str, title: &str) -> Result<Option<Submission>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = snapshot_storage::SnapshotStorage::new_async().await?;
    Ok(Arc::new(storage))
}
