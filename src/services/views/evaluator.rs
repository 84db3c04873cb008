use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ViewService;
use crate::middlewares::RequireJWT;
use crate::models::submissions::entities::{Submission, SubmissionStatus};
use crate::models::views::responses::{EvaluatorTaskRow, EvaluatorViewResponse, GradeTarget};
use crate::models::{ApiResponse, ErrorCode};

// 评审视图投影：完整分配队列 + 仅含 Pending 的可评分子集
pub(crate) fn project_evaluator_queue(assigned: &[Submission]) -> EvaluatorViewResponse {
    let rows = assigned
        .iter()
        .map(|s| EvaluatorTaskRow {
            owner: s.owner.clone(),
            title: s.title.clone(),
            presentation_type: s.presentation_type,
            status: s.status,
        })
        .collect();

    let gradeable = assigned
        .iter()
        .filter(|s| s.status == SubmissionStatus::Pending)
        .map(|s| GradeTarget {
            owner: s.owner.clone(),
            title: s.title.clone(),
        })
        .collect();

    EvaluatorViewResponse {
        assigned: rows,
        gradeable,
    }
}

/// 评审视图
/// GET /views/evaluator
pub async fn evaluator_view(
    service: &ViewService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(username) = RequireJWT::extract_username(request) else {
        return Ok(RequireJWT::unauthorized_response());
    };

    let storage = service.get_storage(request);
    match storage.list_submissions_assigned_to(&username).await {
        Ok(assigned) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            project_evaluator_queue(&assigned),
            "查询成功",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取评审视图失败: {e}"),
            )),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sessions::entities::PresentationType;

    fn submission(owner: &str, title: &str, status: SubmissionStatus) -> Submission {
        Submission {
            owner: owner.to_string(),
            title: title.to_string(),
            presentation_type: PresentationType::Oral,
            status,
            session_id: "S001".to_string(),
            submitted_at: "2025-06-01".parse().unwrap(),
            score: None,
            feedback: None,
            abstract_text: "Abstract.".to_string(),
            supervisor_name: "Dr. Smith".to_string(),
            attachment_ref: "/files/widgets.pdf".to_string(),
        }
    }

    #[test]
    fn test_gradeable_subset_is_pending_only() {
        let assigned = vec![
            submission("alice", "Widgets", SubmissionStatus::Pending),
            submission("bob", "Gadgets", SubmissionStatus::Graded),
        ];
        let view = project_evaluator_queue(&assigned);

        // 完整队列含所有分配的提交
        assert_eq!(view.assigned.len(), 2);
        // 可评分子集只剩 Pending
        assert_eq!(view.gradeable.len(), 1);
        assert_eq!(view.gradeable[0].owner, "alice");
    }

    #[test]
    fn test_empty_queue() {
        let view = project_evaluator_queue(&[]);
        assert!(view.assigned.is_empty());
        assert!(view.gradeable.is_empty());
    }
}
