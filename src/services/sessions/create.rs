use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SessionService;
use crate::errors::SeminarError;
use crate::models::sessions::requests::CreateSessionRequest;
use crate::models::sessions::responses::SessionResponse;
use crate::models::{ApiResponse, ErrorCode};

/// 创建场次
/// POST /sessions
pub async fn create_session(
    service: &SessionService,
    request: &HttpRequest,
    req: CreateSessionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 冲突与过期判定使用服务端时钟
    match storage.create_session(req, chrono::Utc::now()).await {
        Ok(session) => {
            tracing::info!(
                "Session {} created at {} (venue {}, evaluator {})",
                session.id,
                session.scheduled_at,
                session.venue,
                session.assigned_evaluator
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                SessionResponse { session },
                "New Session Created Successfully!",
            )))
        }
        Err(SeminarError::UnknownEvaluator(msg)) => Ok(HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::EvaluatorUnknown, msg))),
        Err(SeminarError::PastSchedule(msg)) => Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::SessionPastSchedule, msg))),
        Err(SeminarError::VenueConflict(msg)) => Ok(HttpResponse::Conflict()
            .json(ApiResponse::error_empty(ErrorCode::SessionVenueConflict, msg))),
        Err(SeminarError::EvaluatorConflict(msg)) => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(ErrorCode::SessionEvaluatorConflict, msg),
        )),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建场次失败: {e}"),
            )),
        ),
    }
}
