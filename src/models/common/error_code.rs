use serde::{Deserialize, Serialize};
use ts_rs::TS;

// API 业务错误代码
// 2xx/4xx/5xx 为通用状态，1xxx 用户模块，2xxx 场次模块，3xxx 提交模块
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
#[repr(i32)]
pub enum ErrorCode {
    Success = 200,
    BadRequest = 400,
    Unauthorized = 401,
    Forbidden = 403,
    NotFound = 404,
    Conflict = 409,
    InternalServerError = 500,

    // 用户模块
    AuthFailed = 1001,
    UserNotFound = 1002,
    UserNameInvalid = 1003,
    PasswordInvalid = 1004,
    UserAlreadyExists = 1005,
    RegisterFailed = 1006,
    TokenInvalid = 1007,

    // 场次模块
    EvaluatorUnknown = 2001,
    SessionPastSchedule = 2002,
    SessionVenueConflict = 2003,
    SessionEvaluatorConflict = 2004,
    SessionNotFound = 2005,
    SessionTaken = 2006,

    // 提交模块
    SubmissionInvalid = 3001,
    SubmissionNotFound = 3002,
    GradeInvalid = 3003,
}
