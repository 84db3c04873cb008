use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 冲突检测窗口：同场地或同评审的两个场次开始时间差必须不小于 20 分钟
pub const CONFLICT_WINDOW_MINUTES: i64 = 20;

// 汇报形式
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/session.ts")]
pub enum PresentationType {
    Oral,   // 口头汇报
    Poster, // 海报展示
}

impl PresentationType {
    pub const ORAL: &'static str = "oral";
    pub const POSTER: &'static str = "poster";
}

impl<'de> Deserialize<'de> for PresentationType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            PresentationType::ORAL => Ok(PresentationType::Oral),
            PresentationType::POSTER => Ok(PresentationType::Poster),
            _ => Err(serde::de::Error::custom(format!(
                "无效的汇报形式: '{s}'. 支持的形式: oral, poster"
            ))),
        }
    }
}

impl std::fmt::Display for PresentationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PresentationType::Oral => write!(f, "{}", PresentationType::ORAL),
            PresentationType::Poster => write!(f, "{}", PresentationType::POSTER),
        }
    }
}

impl std::str::FromStr for PresentationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "oral" => Ok(PresentationType::Oral),
            "poster" => Ok(PresentationType::Poster),
            _ => Err(format!("Invalid presentation type: {s}")),
        }
    }
}

// 场次状态：创建后即为 Scheduled，本系统不支持取消或改期
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/session.ts")]
pub enum SessionStatus {
    Scheduled,
}

impl Default for SessionStatus {
    fn default() -> Self {
        SessionStatus::Scheduled
    }
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionStatus::Scheduled => write!(f, "scheduled"),
        }
    }
}

fn default_assigned_evaluator() -> String {
    // 旧版快照中的场次记录缺少评审字段，加载时回填
    "Unassigned".to_string()
}

// 场次实体，ID 形如 S001，按创建顺序递增分配
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/session.ts")]
pub struct Session {
    pub id: String,
    pub scheduled_at: chrono::DateTime<chrono::Utc>,
    pub venue: String,
    pub presentation_type: PresentationType,
    #[serde(default)]
    pub status: SessionStatus,
    #[serde(default = "default_assigned_evaluator")]
    pub assigned_evaluator: String,
}
