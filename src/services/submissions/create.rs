use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubmissionService;
use crate::errors::SeminarError;
use crate::middlewares::RequireJWT;
use crate::models::submissions::requests::CreateSubmissionRequest;
use crate::models::submissions::responses::SubmissionResponse;
use crate::models::{ApiResponse, ErrorCode};

/// 登记研究提交
/// POST /submissions
pub async fn create_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    req: CreateSubmissionRequest,
) -> ActixResult<HttpResponse> {
    // 提交归属当前登录学生
    let Some(owner) = RequireJWT::extract_username(request) else {
        return Ok(RequireJWT::unauthorized_response());
    };

    let storage = service.get_storage(request);
    let today = chrono::Utc::now().date_naive();

    match storage.create_submission(&owner, req, today).await {
        Ok(submission) => {
            tracing::info!(
                "Submission '{}' by {} registered for session {}",
                submission.title,
                submission.owner,
                submission.session_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                SubmissionResponse { submission },
                "Research Submitted Successfully!",
            )))
        }
        Err(SeminarError::Validation(msg)) => Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::SubmissionInvalid, msg))),
        Err(SeminarError::SessionNotFound(msg)) => Ok(HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::SessionNotFound, msg))),
        Err(SeminarError::SessionTaken(msg)) => Ok(HttpResponse::Conflict()
            .json(ApiResponse::error_empty(ErrorCode::SessionTaken, msg))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("登记提交失败: {e}"),
            )),
        ),
    }
}
