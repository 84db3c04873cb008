use super::entities::UserRole;
use serde::Deserialize;
use ts_rs::TS;

// 用户注册请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct RegisterUserRequest {
    pub username: String,
    pub password: String,
    pub role: UserRole,
}

// 用户列表查询参数（来自HTTP请求）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct UserListQuery {
    pub role: Option<UserRole>,
}
