use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 用户角色
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub enum UserRole {
    Student,     // 学生（提交研究）
    Evaluator,   // 评审（打分）
    Coordinator, // 协调员（排期管理）
}

impl UserRole {
    pub const STUDENT: &'static str = "student";
    pub const EVALUATOR: &'static str = "evaluator";
    pub const COORDINATOR: &'static str = "coordinator";

    pub fn student_roles() -> &'static [&'static UserRole] {
        &[&Self::Student]
    }
    pub fn evaluator_roles() -> &'static [&'static UserRole] {
        &[&Self::Evaluator]
    }
    pub fn coordinator_roles() -> &'static [&'static UserRole] {
        &[&Self::Coordinator]
    }
    // 评审与协调员都可查看完整场次表与研究详情
    pub fn staff_roles() -> &'static [&'static UserRole] {
        &[&Self::Evaluator, &Self::Coordinator]
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            UserRole::STUDENT => Ok(UserRole::Student),
            UserRole::EVALUATOR => Ok(UserRole::Evaluator),
            UserRole::COORDINATOR => Ok(UserRole::Coordinator),
            _ => Err(serde::de::Error::custom(format!(
                "无效的用户角色: '{s}'. 支持的角色: student, evaluator, coordinator"
            ))),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Student => write!(f, "{}", UserRole::STUDENT),
            UserRole::Evaluator => write!(f, "{}", UserRole::EVALUATOR),
            UserRole::Coordinator => write!(f, "{}", UserRole::COORDINATOR),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(UserRole::Student),
            "evaluator" => Ok(UserRole::Evaluator),
            "coordinator" => Ok(UserRole::Coordinator),
            _ => Err(format!("Invalid user role: {s}")),
        }
    }
}

// 用户实体，以用户名为唯一键，注册后不可删除
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct User {
    pub username: String,
    #[serde(skip_serializing, default)] // 不序列化到JSON响应中
    #[ts(skip)]
    pub password_hash: String,
    pub role: UserRole,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub last_login: Option<chrono::DateTime<chrono::Utc>>,
}

impl User {
    // 生成访问令牌（使用真正的 JWT）
    pub async fn generate_access_token(&self) -> String {
        match crate::utils::jwt::JwtUtils::generate_access_token(
            &self.username,
            &self.role.to_string(),
        ) {
            Ok(token) => token,
            Err(e) => {
                // 如果 JWT 生成失败，返回一个简单的 token（不推荐在生产环境中使用）
                tracing::error!("JWT token 生成失败: {}", e);
                format!(
                    "fallback_token_{}_{}",
                    self.username,
                    chrono::Utc::now().timestamp()
                )
            }
        }
    }

    // 生成 token 对（access + refresh）
    pub async fn generate_token_pair(
        &self,
        refresh_token_expiry: Option<chrono::TimeDelta>,
    ) -> Result<crate::utils::jwt::TokenPair, String> {
        crate::utils::jwt::JwtUtils::generate_token_pair(
            &self.username,
            &self.role.to_string(),
            refresh_token_expiry,
        )
        .map_err(|e| format!("生成 token 对失败: {e}"))
    }
}
