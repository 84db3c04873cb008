use super::entities::Session;
use serde::Serialize;
use ts_rs::TS;

// 场次响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/session.ts")]
pub struct SessionResponse {
    pub session: Session,
}

// 场次列表响应（完整表或报名池，按创建顺序）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/session.ts")]
pub struct SessionListResponse {
    pub items: Vec<Session>,
}
