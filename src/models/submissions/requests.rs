use crate::models::sessions::entities::PresentationType;
use serde::Deserialize;
use ts_rs::TS;

// 研究提交请求（学生）
// presentation_type 仅为表单回显值，存储层会强制对齐到场次类型
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct CreateSubmissionRequest {
    pub title: String,
    pub presentation_type: PresentationType,
    pub session_id: String,
    pub abstract_text: String,
    pub supervisor_name: String,
    pub attachment_ref: String,
}

// 评分请求（评审）
// 评分细则四项依次为：问题清晰度、研究方法、结果分析、汇报表现，各 0-25 分
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct GradeSubmissionRequest {
    pub owner: String,
    pub title: String,
    pub rubric_scores: [i32; 4],
    #[serde(default)]
    pub feedback: String,
}
