use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ViewService;
use crate::middlewares::RequireJWT;
use crate::models::submissions::entities::Submission;
use crate::models::views::responses::{StudentSubmissionRow, StudentViewResponse};
use crate::models::{ApiResponse, ErrorCode};

/// 反馈标记：有内容且不是 "-" 占位符才算有反馈
pub(crate) fn has_feedback(feedback: Option<&str>) -> bool {
    matches!(feedback, Some(fb) if !fb.is_empty() && fb != "-")
}

// 学生视图行投影
pub(crate) fn project_student_rows(submissions: &[Submission]) -> Vec<StudentSubmissionRow> {
    submissions
        .iter()
        .map(|s| StudentSubmissionRow {
            title: s.title.clone(),
            presentation_type: s.presentation_type,
            status: s.status,
            session_id: s.session_id.clone(),
            submitted_at: s.submitted_at,
            score: s.score,
            has_feedback: has_feedback(s.feedback.as_deref()),
            feedback: s.feedback.clone(),
        })
        .collect()
}

/// 学生视图
/// GET /views/student
pub async fn student_view(
    service: &ViewService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(username) = RequireJWT::extract_username(request) else {
        return Ok(RequireJWT::unauthorized_response());
    };

    let storage = service.get_storage(request);
    match storage.list_submissions_by_owner(&username).await {
        Ok(submissions) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            StudentViewResponse {
                items: project_student_rows(&submissions),
            },
            "查询成功",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取学生视图失败: {e}"),
            )),
        ),
    }
}
