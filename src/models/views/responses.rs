use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::sessions::entities::{PresentationType, Session};
use crate::models::submissions::entities::SubmissionStatus;
use crate::models::users::entities::User;

// 学生视图行：本人提交 + 派生的"是否有反馈"标记
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/view.ts")]
pub struct StudentSubmissionRow {
    pub title: String,
    pub presentation_type: PresentationType,
    pub status: SubmissionStatus,
    pub session_id: String,
    pub submitted_at: chrono::NaiveDate,
    pub score: Option<i32>,
    pub has_feedback: bool,
    pub feedback: Option<String>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/view.ts")]
pub struct StudentViewResponse {
    pub items: Vec<StudentSubmissionRow>,
}

// 评审视图行：分配到该评审场次的提交
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/view.ts")]
pub struct EvaluatorTaskRow {
    pub owner: String,
    pub title: String,
    pub presentation_type: PresentationType,
    pub status: SubmissionStatus,
}

// 评分目标：仅 Pending 状态的提交可选
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/view.ts")]
pub struct GradeTarget {
    pub owner: String,
    pub title: String,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/view.ts")]
pub struct EvaluatorViewResponse {
    pub assigned: Vec<EvaluatorTaskRow>,
    pub gradeable: Vec<GradeTarget>,
}

// 协调员总览行
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/view.ts")]
pub struct OverviewSubmissionRow {
    pub owner: String,
    pub title: String,
    pub presentation_type: PresentationType,
    pub status: SubmissionStatus,
    pub session_id: String,
    pub score: Option<i32>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/view.ts")]
pub struct CoordinatorViewResponse {
    pub submissions: Vec<OverviewSubmissionRow>,
    pub sessions: Vec<Session>,
    pub users: Vec<User>,
}

// 奖项类别：口头/海报两类按汇报形式过滤候选人，其余两类不过滤
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/view.ts")]
pub enum AwardCategory {
    BestOral,
    BestPoster,
    PeoplesChoice,
    ResearchExcellence,
}

impl AwardCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            AwardCategory::BestOral => "Best Oral Presentation",
            AwardCategory::BestPoster => "Best Poster Presentation",
            AwardCategory::PeoplesChoice => "People's Choice Award",
            AwardCategory::ResearchExcellence => "Research Excellence",
        }
    }

    // 类别要求的汇报形式，None 表示不限
    pub fn required_type(&self) -> Option<PresentationType> {
        match self {
            AwardCategory::BestOral => Some(PresentationType::Oral),
            AwardCategory::BestPoster => Some(PresentationType::Poster),
            AwardCategory::PeoplesChoice | AwardCategory::ResearchExcellence => None,
        }
    }
}

impl<'de> Deserialize<'de> for AwardCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "best_oral" => Ok(AwardCategory::BestOral),
            "best_poster" => Ok(AwardCategory::BestPoster),
            "peoples_choice" => Ok(AwardCategory::PeoplesChoice),
            "research_excellence" => Ok(AwardCategory::ResearchExcellence),
            _ => Err(serde::de::Error::custom(format!(
                "无效的奖项类别: '{s}'. 支持: best_oral, best_poster, peoples_choice, research_excellence"
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/view.ts")]
pub struct AwardCandidate {
    pub owner: String,
    pub title: String,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/view.ts")]
pub struct AwardCandidatesResponse {
    pub category: AwardCategory,
    pub display_name: String,
    pub candidates: Vec<AwardCandidate>,
}
