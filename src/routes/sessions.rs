use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::sessions::requests::CreateSessionRequest;
use crate::models::users::entities::UserRole;
use crate::services::SessionService;

// 懒加载的全局 SESSION_SERVICE 实例
static SESSION_SERVICE: Lazy<SessionService> = Lazy::new(SessionService::new_lazy);

// HTTP处理程序
pub async fn create_session(
    req: HttpRequest,
    session_data: web::Json<CreateSessionRequest>,
) -> ActixResult<HttpResponse> {
    SESSION_SERVICE
        .create_session(&req, session_data.into_inner())
        .await
}

pub async fn list_sessions(req: HttpRequest) -> ActixResult<HttpResponse> {
    SESSION_SERVICE.list_sessions(&req).await
}

pub async fn list_open_sessions(req: HttpRequest) -> ActixResult<HttpResponse> {
    SESSION_SERVICE.list_open_sessions(&req).await
}

pub async fn get_session(
    req: HttpRequest,
    session_id: web::Path<String>,
) -> ActixResult<HttpResponse> {
    SESSION_SERVICE
        .get_session(&req, session_id.into_inner())
        .await
}

// 配置路由
pub fn configure_session_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/sessions")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(
                        web::get()
                            .to(list_sessions)
                            // 评审与协调员查看完整场次表
                            .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                    )
                    .route(
                        web::post()
                            .to(create_session)
                            // 仅协调员可排期
                            .wrap(middlewares::RequireRole::new(&UserRole::Coordinator)),
                    ),
            )
            .service(
                web::resource("/open").route(
                    web::get()
                        .to(list_open_sessions)
                        // 学生报名池
                        .wrap(middlewares::RequireRole::new(&UserRole::Student)),
                ),
            )
            .service(web::resource("/{session_id}").route(web::get().to(get_session))),
    );
}
