use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AwardService;
use crate::models::submissions::entities::Submission;
use crate::models::views::requests::AwardCandidatesQuery;
use crate::models::views::responses::{AwardCandidate, AwardCandidatesResponse, AwardCategory};
use crate::models::{ApiResponse, ErrorCode};

// 奖项候选人投影：口头/海报两类按汇报形式过滤，其余类别接受全部提交
pub(crate) fn qualified_candidates(
    category: AwardCategory,
    submissions: &[Submission],
) -> Vec<AwardCandidate> {
    submissions
        .iter()
        .filter(|s| {
            category
                .required_type()
                .is_none_or(|t| s.presentation_type == t)
        })
        .map(|s| AwardCandidate {
            owner: s.owner.clone(),
            title: s.title.clone(),
        })
        .collect()
}

/// 奖项候选人列表
/// GET /awards/candidates?category=
pub async fn list_candidates(
    service: &AwardService,
    request: &HttpRequest,
    query: AwardCandidatesQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_submissions().await {
        Ok(submissions) => {
            let candidates = qualified_candidates(query.category, &submissions);
            let message = if candidates.is_empty() {
                "No qualified submissions available for this category!"
            } else {
                "查询成功"
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                AwardCandidatesResponse {
                    category: query.category,
                    display_name: query.category.display_name().to_string(),
                    candidates,
                },
                message,
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取奖项候选人失败: {e}"),
            )),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sessions::entities::PresentationType;
    use crate::models::submissions::entities::SubmissionStatus;

    fn submission(owner: &str, ptype: PresentationType) -> Submission {
        Submission {
            owner: owner.to_string(),
            title: format!("{owner}'s research"),
            presentation_type: ptype,
            status: SubmissionStatus::Pending,
            session_id: "S001".to_string(),
            submitted_at: "2025-06-01".parse().unwrap(),
            score: None,
            feedback: None,
            abstract_text: "Abstract.".to_string(),
            supervisor_name: "Dr. Smith".to_string(),
            attachment_ref: "/files/a.pdf".to_string(),
        }
    }

    #[test]
    fn test_oral_category_filters_by_type() {
        let subs = vec![
            submission("alice", PresentationType::Oral),
            submission("bob", PresentationType::Poster),
        ];
        let oral = qualified_candidates(AwardCategory::BestOral, &subs);
        assert_eq!(oral.len(), 1);
        assert_eq!(oral[0].owner, "alice");

        let poster = qualified_candidates(AwardCategory::BestPoster, &subs);
        assert_eq!(poster.len(), 1);
        assert_eq!(poster[0].owner, "bob");
    }

    #[test]
    fn test_open_categories_accept_all_types() {
        let subs = vec![
            submission("alice", PresentationType::Oral),
            submission("bob", PresentationType::Poster),
        ];
        assert_eq!(
            qualified_candidates(AwardCategory::PeoplesChoice, &subs).len(),
            2
        );
        assert_eq!(
            qualified_candidates(AwardCategory::ResearchExcellence, &subs).len(),
            2
        );
    }
}
