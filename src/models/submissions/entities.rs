use crate::models::sessions::entities::PresentationType;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 提交状态机：Pending -> Graded（重复评分允许，直接覆盖）
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub enum SubmissionStatus {
    Pending,
    Graded,
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionStatus::Pending => write!(f, "pending"),
            SubmissionStatus::Graded => write!(f, "graded"),
        }
    }
}

// 研究提交实体
// session_id 在创建时绑定且不可变更；presentation_type 以所绑定场次的类型为准
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct Submission {
    pub owner: String,
    pub title: String,
    pub presentation_type: PresentationType,
    pub status: SubmissionStatus,
    pub session_id: String,
    pub submitted_at: chrono::NaiveDate,
    pub score: Option<i32>,
    pub feedback: Option<String>,
    pub abstract_text: String,
    pub supervisor_name: String,
    pub attachment_ref: String, // 附件引用，由调用方提供，核心不校验其存在性
}
