use super::entities::PresentationType;
use serde::Deserialize;
use ts_rs::TS;

// 创建场次请求（协调员）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/session.ts")]
pub struct CreateSessionRequest {
    pub scheduled_at: chrono::DateTime<chrono::Utc>,
    pub venue: String,
    pub presentation_type: PresentationType,
    pub evaluator: String,
}
