//! 快照文件格式与引导状态
//!
//! 单个 JSON 文件承载三个聚合：用户表、提交列表、场次列表。
//! 旧版快照中的场次记录可能缺少 assigned_evaluator 字段，
//! 反序列化时由 Session 的 serde 默认值回填为 "Unassigned"。
//! 文件缺失或无法解析时回退到固定引导状态并立即重新保存。

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::Result;
use crate::models::sessions::entities::Session;
use crate::models::submissions::entities::Submission;
use crate::models::users::entities::{User, UserRole};
use crate::utils::password::hash_password;

/// 引导状态的固定凭据
const BOOTSTRAP_PASSWORD: &str = "pass";

// 快照中的用户记录
// User 实体出于 API 安全跳过序列化 password_hash，落盘需要完整字段，故单独建记录类型
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    pub password_hash: String,
    pub role: UserRole,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub last_login: Option<chrono::DateTime<chrono::Utc>>,
}

impl From<User> for UserRecord {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            password_hash: user.password_hash,
            role: user.role,
            created_at: user.created_at,
            last_login: user.last_login,
        }
    }
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        Self {
            username: record.username,
            password_hash: record.password_hash,
            role: record.role,
            created_at: record.created_at,
            last_login: record.last_login,
        }
    }
}

// 全量快照状态：三个聚合按固定顺序序列化
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotState {
    pub users: HashMap<String, UserRecord>,
    pub submissions: Vec<Submission>,
    pub sessions: Vec<Session>,
}

/// 引导状态：每个角色一个种子用户，提交与场次为空
pub fn bootstrap_state() -> Result<SnapshotState> {
    let now = chrono::Utc::now();
    let mut users = HashMap::new();
    for (username, role) in [
        ("student1", UserRole::Student),
        ("eval1", UserRole::Evaluator),
        ("coord1", UserRole::Coordinator),
    ] {
        users.insert(
            username.to_string(),
            UserRecord {
                username: username.to_string(),
                password_hash: hash_password(BOOTSTRAP_PASSWORD)?,
                role,
                created_at: now,
                last_login: None,
            },
        );
    }

    Ok(SnapshotState {
        users,
        submissions: Vec::new(),
        sessions: Vec::new(),
    })
}

/// 加载快照；文件缺失或解析失败时回退到引导状态并立即重新保存
pub fn load_or_bootstrap(path: &Path) -> Result<SnapshotState> {
    if path.exists() {
        match std::fs::read_to_string(path) {
            Ok(raw) => match serde_json::from_str::<SnapshotState>(&raw) {
                Ok(state) => return Ok(state),
                Err(e) => {
                    warn!("快照文件解析失败，回退到引导状态: {}", e);
                }
            },
            Err(e) => {
                warn!("快照文件读取失败，回退到引导状态: {}", e);
            }
        }
    }

    let state = bootstrap_state()?;
    save_state(path, &state)?;
    Ok(state)
}

/// 保存快照：整体覆盖写入
pub fn save_state(path: &Path, state: &SnapshotState) -> Result<()> {
    let raw = serde_json::to_string_pretty(state)?;
    std::fs::write(path, raw)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::password::verify_password;

    #[test]
    fn test_bootstrap_state_seeds_one_user_per_role() {
        let state = bootstrap_state().unwrap();
        assert_eq!(state.users.len(), 3);
        assert_eq!(state.users["student1"].role, UserRole::Student);
        assert_eq!(state.users["eval1"].role, UserRole::Evaluator);
        assert_eq!(state.users["coord1"].role, UserRole::Coordinator);
        assert!(state.submissions.is_empty());
        assert!(state.sessions.is_empty());
        assert!(verify_password("pass", &state.users["eval1"].password_hash));
    }

    #[test]
    fn test_missing_file_bootstraps_and_resaves() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seminar_data.json");

        let state = load_or_bootstrap(&path).unwrap();
        assert_eq!(state.users.len(), 3);
        // 引导状态必须立即落盘
        assert!(path.exists());

        let reloaded = load_or_bootstrap(&path).unwrap();
        assert_eq!(reloaded.users.len(), 3);
    }

    #[test]
    fn test_corrupt_file_falls_back_to_bootstrap() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seminar_data.json");
        std::fs::write(&path, "{ not valid json").unwrap();

        let state = load_or_bootstrap(&path).unwrap();
        assert_eq!(state.users.len(), 3);

        // 损坏的文件已被引导状态覆盖，再次加载应直接解析成功
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(serde_json::from_str::<SnapshotState>(&raw).is_ok());
    }

    #[test]
    fn test_legacy_session_record_backfills_evaluator() {
        // 旧版快照的场次记录没有 assigned_evaluator 字段
        let raw = r#"{
            "users": {},
            "submissions": [],
            "sessions": [{
                "id": "S001",
                "scheduled_at": "2025-03-01T09:00:00Z",
                "venue": "V1",
                "presentation_type": "oral",
                "status": "scheduled"
            }]
        }"#;
        let state: SnapshotState = serde_json::from_str(raw).unwrap();
        assert_eq!(state.sessions[0].assigned_evaluator, "Unassigned");
    }

    #[test]
    fn test_round_trip_preserves_all_aggregates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seminar_data.json");

        let mut state = bootstrap_state().unwrap();
        state.sessions.push(Session {
            id: "S001".to_string(),
            scheduled_at: "2025-03-01T09:00:00Z".parse().unwrap(),
            venue: "V1".to_string(),
            presentation_type: crate::models::sessions::entities::PresentationType::Oral,
            status: Default::default(),
            assigned_evaluator: "eval1".to_string(),
        });
        save_state(&path, &state).unwrap();

        let reloaded = load_or_bootstrap(&path).unwrap();
        assert_eq!(reloaded.users.len(), state.users.len());
        assert_eq!(reloaded.sessions.len(), 1);
        assert_eq!(reloaded.sessions[0].id, "S001");
        assert_eq!(reloaded.sessions[0].assigned_evaluator, "eval1");
        // 密码哈希必须完整保留，否则旧用户无法登录
        assert_eq!(
            reloaded.users["student1"].password_hash,
            state.users["student1"].password_hash
        );
    }
}
