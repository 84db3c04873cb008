use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SessionService;
use crate::models::sessions::responses::{SessionListResponse, SessionResponse};
use crate::models::{ApiResponse, ErrorCode};

/// 完整场次表
/// GET /sessions
pub async fn list_sessions(
    service: &SessionService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_sessions().await {
        Ok(items) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(SessionListResponse { items }, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取场次列表失败: {e}"),
            )),
        ),
    }
}

/// 报名池：未被绑定且开始时间在未来的场次
/// GET /sessions/open
pub async fn list_open_sessions(
    service: &SessionService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_open_sessions(chrono::Utc::now()).await {
        Ok(items) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(SessionListResponse { items }, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取报名池失败: {e}"),
            )),
        ),
    }
}

/// 场次详情
/// GET /sessions/{id}
pub async fn get_session(
    service: &SessionService,
    request: &HttpRequest,
    session_id: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_session_by_id(&session_id).await {
        Ok(Some(session)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(SessionResponse { session }, "查询成功"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SessionNotFound,
            format!("Session '{session_id}' does not exist"),
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取场次失败: {e}"),
            )),
        ),
    }
}
