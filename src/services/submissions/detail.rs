use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubmissionService;
use crate::models::submissions::responses::SubmissionResponse;
use crate::models::views::requests::SubmissionDetailQuery;
use crate::models::{ApiResponse, ErrorCode};

/// 研究详情（评审查看摘要、导师与附件引用）
/// GET /submissions/detail?owner=&title=
pub async fn get_submission_detail(
    service: &SubmissionService,
    request: &HttpRequest,
    query: SubmissionDetailQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_submission(&query.owner, &query.title).await {
        Ok(Some(submission)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            SubmissionResponse { submission },
            "查询成功",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubmissionNotFound,
            format!("No submission titled '{}' by '{}'", query.title, query.owner),
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取提交详情失败: {e}"),
            )),
        ),
    }
}
