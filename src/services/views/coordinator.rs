use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ViewService;
use crate::models::submissions::entities::Submission;
use crate::models::views::responses::{CoordinatorViewResponse, OverviewSubmissionRow};
use crate::models::{ApiResponse, ErrorCode};

// 协调员总览行投影
pub(crate) fn project_overview_rows(submissions: &[Submission]) -> Vec<OverviewSubmissionRow> {
    submissions
        .iter()
        .map(|s| OverviewSubmissionRow {
            owner: s.owner.clone(),
            title: s.title.clone(),
            presentation_type: s.presentation_type,
            status: s.status,
            session_id: s.session_id.clone(),
            score: s.score,
        })
        .collect()
}

/// 协调员视图：不过滤的三张全表
/// GET /views/coordinator
pub async fn coordinator_view(
    service: &ViewService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let submissions = match storage.list_submissions().await {
        Ok(items) => items,
        Err(e) => return Ok(internal_error(e)),
    };
    let sessions = match storage.list_sessions().await {
        Ok(items) => items,
        Err(e) => return Ok(internal_error(e)),
    };
    let users = match storage.list_users().await {
        Ok(items) => items,
        Err(e) => return Ok(internal_error(e)),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        CoordinatorViewResponse {
            submissions: project_overview_rows(&submissions),
            sessions,
            users,
        },
        "查询成功",
    )))
}

fn internal_error(e: crate::errors::SeminarError) -> HttpResponse {
    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
        ErrorCode::InternalServerError,
        format!("获取协调员视图失败: {e}"),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sessions::entities::PresentationType;
    use crate::models::submissions::entities::SubmissionStatus;

    #[test]
    fn test_overview_rows_keep_submission_order() {
        let subs = vec![
            Submission {
                owner: "alice".to_string(),
                title: "Widgets".to_string(),
                presentation_type: PresentationType::Oral,
                status: SubmissionStatus::Graded,
                session_id: "S001".to_string(),
                submitted_at: "2025-06-01".parse().unwrap(),
                score: Some(88),
                feedback: Some("Good job!".to_string()),
                abstract_text: "A.".to_string(),
                supervisor_name: "Dr. Smith".to_string(),
                attachment_ref: "/files/a.pdf".to_string(),
            },
            Submission {
                owner: "bob".to_string(),
                title: "Gadgets".to_string(),
                presentation_type: PresentationType::Poster,
                status: SubmissionStatus::Pending,
                session_id: "S002".to_string(),
                submitted_at: "2025-06-02".parse().unwrap(),
                score: None,
                feedback: None,
                abstract_text: "B.".to_string(),
                supervisor_name: "Dr. Jones".to_string(),
                attachment_ref: "/files/b.pdf".to_string(),
            },
        ];
        let rows = project_overview_rows(&subs);
        assert_eq!(rows[0].owner, "alice");
        assert_eq!(rows[0].score, Some(88));
        assert_eq!(rows[1].owner, "bob");
        assert!(rows[1].score.is_none());
    }
}
