use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::users::entities::UserRole;
use crate::models::views::requests::AwardCandidatesQuery;
use crate::services::AwardService;

// 懒加载的全局 AWARD_SERVICE 实例
static AWARD_SERVICE: Lazy<AwardService> = Lazy::new(AwardService::new_lazy);

// HTTP处理程序
pub async fn list_candidates(
    req: HttpRequest,
    query: web::Query<AwardCandidatesQuery>,
) -> ActixResult<HttpResponse> {
    AWARD_SERVICE
        .list_candidates(&req, query.into_inner())
        .await
}

// 配置路由
pub fn configure_award_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/awards")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/candidates").route(
                    web::get()
                        .to(list_candidates)
                        // 仅协调员管理奖项
                        .wrap(middlewares::RequireRole::new(&UserRole::Coordinator)),
                ),
            ),
    );
}
