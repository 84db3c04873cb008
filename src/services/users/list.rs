use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserService;
use crate::models::users::requests::UserListQuery;
use crate::models::users::responses::{UserListResponse, UsernameListResponse};
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_users(
    service: &UserService,
    query: UserListQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 带角色过滤时只返回用户名列表（用于排期表单的评审下拉框）
    if let Some(role) = query.role {
        return match storage.list_usernames_by_role(role).await {
            Ok(usernames) => Ok(HttpResponse::Ok().json(ApiResponse::success(
                UsernameListResponse { items: usernames },
                "查询成功",
            ))),
            Err(e) => Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("获取用户列表失败: {e}"),
                )),
            ),
        };
    }

    match storage.list_users().await {
        Ok(users) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            UserListResponse { items: users },
            "查询成功",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取用户列表失败: {e}"),
            )),
        ),
    }
}
