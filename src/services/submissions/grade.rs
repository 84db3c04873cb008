use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubmissionService;
use crate::errors::SeminarError;
use crate::models::submissions::requests::GradeSubmissionRequest;
use crate::models::submissions::responses::SubmissionResponse;
use crate::models::{ApiResponse, ErrorCode};

/// 提交评分
/// POST /submissions/grade
pub async fn grade_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    req: GradeSubmissionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.grade_submission(req).await {
        Ok(submission) => {
            tracing::info!(
                "Submission '{}' by {} graded: {}/100",
                submission.title,
                submission.owner,
                submission.score.unwrap_or(0)
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                SubmissionResponse { submission },
                "Evaluation Submitted!",
            )))
        }
        Err(SeminarError::Validation(msg)) => Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::GradeInvalid, msg))),
        Err(SeminarError::SubmissionNotFound(msg)) => Ok(HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::SubmissionNotFound, msg))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("提交评分失败: {e}"),
            )),
        ),
    }
}
