use super::entities::Submission;
use serde::Serialize;
use ts_rs::TS;

// 提交响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmissionResponse {
    pub submission: Submission,
}
