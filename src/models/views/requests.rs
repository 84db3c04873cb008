use serde::Deserialize;
use ts_rs::TS;

use super::responses::AwardCategory;

// 研究详情查询参数（评审/协调员）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/view.ts")]
pub struct SubmissionDetailQuery {
    pub owner: String,
    pub title: String,
}

// 奖项候选人查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/view.ts")]
pub struct AwardCandidatesQuery {
    pub category: AwardCategory,
}
