use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::errors::SeminarError;
use crate::models::{
    ApiResponse, ErrorCode,
    auth::{LoginRequest, LoginResponse},
};
use crate::utils::jwt;

use super::AuthService;

pub async fn handle_login(
    service: &AuthService,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = service.get_config();

    // 1. 校验凭据；区分"用户不存在"与"密码错误"（与原登录对话框一致）
    if let Err(e) = storage
        .authenticate_user(&login_request.username, &login_request.password)
        .await
    {
        return Ok(match e {
            SeminarError::UserNotFound(_) => HttpResponse::Unauthorized().json(
                ApiResponse::error_empty(ErrorCode::UserNotFound, "User not found!"),
            ),
            SeminarError::BadCredential(_) => HttpResponse::Unauthorized().json(
                ApiResponse::error_empty(ErrorCode::AuthFailed, "Incorrect password!"),
            ),
            other => HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Login failed: {other}"),
            )),
        });
    }

    // 2. 更新最后登录时间
    let _ = storage.update_last_login(&login_request.username).await;

    // 3. 取回用户实体
    let user = match storage.get_user_by_username(&login_request.username).await {
        Ok(Some(user)) => user,
        _ => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Login failed, unable to load user",
                )),
            );
        }
    };

    // 4. 生成令牌对
    match user
        .generate_token_pair(
            login_request
                .remember_me
                .then(|| chrono::Duration::days(config.jwt.refresh_token_remember_me_expiry)),
        )
        .await
    {
        Ok(token_pair) => {
            tracing::info!("User {} logged in successfully", user.username);

            let response = LoginResponse {
                access_token: token_pair.access_token,
                expires_in: config.jwt.access_token_expiry * 60, // 转换为秒
                user,
                created_at: chrono::Utc::now(),
            };

            // 5. 创建 refresh token cookie
            let refresh_cookie = jwt::JwtUtils::create_refresh_token_cookie(&token_pair.refresh_token);

            Ok(HttpResponse::Ok()
                .cookie(refresh_cookie)
                .json(ApiResponse::success(response, "Login successful")))
        }
        Err(e) => {
            tracing::error!("Failed to generate JWT token: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Login failed, unable to generate token",
                )),
            )
        }
    }
}
