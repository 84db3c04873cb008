use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::users::entities::UserRole;
use crate::services::ViewService;

// 懒加载的全局 VIEW_SERVICE 实例
static VIEW_SERVICE: Lazy<ViewService> = Lazy::new(ViewService::new_lazy);

// HTTP处理程序
pub async fn student_view(req: HttpRequest) -> ActixResult<HttpResponse> {
    VIEW_SERVICE.student_view(&req).await
}

pub async fn evaluator_view(req: HttpRequest) -> ActixResult<HttpResponse> {
    VIEW_SERVICE.evaluator_view(&req).await
}

pub async fn coordinator_view(req: HttpRequest) -> ActixResult<HttpResponse> {
    VIEW_SERVICE.coordinator_view(&req).await
}

// 配置路由
pub fn configure_view_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/views")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/student").route(
                    web::get()
                        .to(student_view)
                        .wrap(middlewares::RequireRole::new_any(UserRole::student_roles())),
                ),
            )
            .service(
                web::resource("/evaluator").route(
                    web::get()
                        .to(evaluator_view)
                        .wrap(middlewares::RequireRole::new_any(
                            UserRole::evaluator_roles(),
                        )),
                ),
            )
            .service(
                web::resource("/coordinator").route(
                    web::get()
                        .to(coordinator_view)
                        .wrap(middlewares::RequireRole::new_any(
                            UserRole::coordinator_roles(),
                        )),
                ),
            ),
    );
}
