use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AuthService;
use crate::middlewares::RequireJWT;
use crate::models::auth::responses::{
    RefreshTokenResponse, TokenVerificationResponse, UserInfoResponse,
};
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::jwt::{JwtUtils, REFRESH_TOKEN_COOKIE};

// 使用 refresh token cookie 换取新的 access token
pub async fn handle_refresh_token(
    service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(cookie) = request.cookie(REFRESH_TOKEN_COOKIE) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::TokenInvalid,
            "Missing refresh token",
        )));
    };

    let claims = match JwtUtils::verify_refresh_token(cookie.value()) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::info!("Refresh token validation failed: {}", e);
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::TokenInvalid,
                "Invalid refresh token",
            )));
        }
    };

    // 确认用户仍然存在后再签发新令牌
    let storage = service.get_storage(request);
    let user = match storage.get_user_by_username(&claims.sub).await {
        Ok(Some(user)) => user,
        _ => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "User no longer exists",
            )));
        }
    };

    let config = service.get_config();
    let response = RefreshTokenResponse {
        access_token: user.generate_access_token().await,
        expires_in: config.jwt.access_token_expiry * 60,
    };
    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Token refreshed")))
}

// 验证当前 access token（由 RequireJWT 前置保障，到达即有效）
pub async fn handle_verify_token(
    _service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    match RequireJWT::extract_user_claims(request) {
        Some(_) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            TokenVerificationResponse { is_valid: true },
            "Token is valid",
        ))),
        None => Ok(RequireJWT::unauthorized_response()),
    }
}

// 获取当前登录用户信息
pub async fn handle_get_user(
    _service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    match RequireJWT::extract_user_claims(request) {
        Some(user) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            UserInfoResponse { user },
            "查询成功",
        ))),
        None => Ok(RequireJWT::unauthorized_response()),
    }
}
