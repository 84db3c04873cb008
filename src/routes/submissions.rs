use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::submissions::requests::{CreateSubmissionRequest, GradeSubmissionRequest};
use crate::models::users::entities::UserRole;
use crate::models::views::requests::SubmissionDetailQuery;
use crate::services::SubmissionService;

// 懒加载的全局 SUBMISSION_SERVICE 实例
static SUBMISSION_SERVICE: Lazy<SubmissionService> = Lazy::new(SubmissionService::new_lazy);

// HTTP处理程序
pub async fn create_submission(
    req: HttpRequest,
    submission_data: web::Json<CreateSubmissionRequest>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .create_submission(&req, submission_data.into_inner())
        .await
}

pub async fn grade_submission(
    req: HttpRequest,
    grade_data: web::Json<GradeSubmissionRequest>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .grade_submission(&req, grade_data.into_inner())
        .await
}

pub async fn get_submission_detail(
    req: HttpRequest,
    query: web::Query<SubmissionDetailQuery>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .get_submission_detail(&req, query.into_inner())
        .await
}

// 配置路由
pub fn configure_submission_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/submissions")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("").route(
                    web::post()
                        .to(create_submission)
                        // 学生登记研究提交
                        .wrap(middlewares::RequireRole::new(&UserRole::Student)),
                ),
            )
            .service(
                web::resource("/grade").route(
                    web::post()
                        .to(grade_submission)
                        // 评审提交评分
                        .wrap(middlewares::RequireRole::new(&UserRole::Evaluator)),
                ),
            )
            .service(
                web::resource("/detail").route(
                    web::get()
                        .to(get_submission_detail)
                        // 评审与协调员查看研究详情
                        .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                ),
            ),
    );
}
