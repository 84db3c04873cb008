use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AuthService;
use crate::errors::SeminarError;
use crate::models::{
    ApiResponse, ErrorCode,
    users::{requests::RegisterUserRequest, responses::UserResponse},
};
use crate::utils::validate::{validate_password, validate_username};

pub async fn handle_register(
    service: &AuthService,
    register_request: RegisterUserRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // 验证用户名
    if let Err(msg) = validate_username(&register_request.username) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserNameInvalid, msg)));
    }

    // 验证密码
    if let Err(msg) = validate_password(&register_request.password) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::PasswordInvalid, msg)));
    }

    let storage = service.get_storage(request);

    match storage.register_user(register_request).await {
        Ok(user) => Ok(HttpResponse::Created().json(ApiResponse::success(
            UserResponse { user },
            "Account created successfully!",
        ))),
        Err(SeminarError::Validation(msg)) => Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg))),
        Err(SeminarError::DuplicateUser(_)) => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(ErrorCode::UserAlreadyExists, "Username already exists!"),
        )),
        Err(e) => {
            error!("User registration failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::RegisterFailed,
                    format!("Registration failed: {e}"),
                )),
            )
        }
    }
}
