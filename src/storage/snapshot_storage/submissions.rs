//! 提交台账聚合

use chrono::NaiveDate;

use super::SnapshotStorage;
use crate::errors::{Result, SeminarError};
use crate::models::submissions::entities::{Submission, SubmissionStatus};
use crate::models::submissions::requests::{CreateSubmissionRequest, GradeSubmissionRequest};
use crate::utils::validate::validate_required;

/// 评分未填写评语时的默认反馈
const DEFAULT_FEEDBACK: &str = "Good job!";

impl SnapshotStorage {
    pub(crate) async fn create_submission_impl(
        &self,
        owner: &str,
        req: CreateSubmissionRequest,
        today: NaiveDate,
    ) -> Result<Submission> {
        validate_required("Research title", &req.title).map_err(SeminarError::validation)?;
        validate_required("Abstract", &req.abstract_text).map_err(SeminarError::validation)?;
        validate_required("Supervisor name", &req.supervisor_name)
            .map_err(SeminarError::validation)?;
        validate_required("Presentation file", &req.attachment_ref)
            .map_err(SeminarError::validation)?;
        validate_required("Target session", &req.session_id).map_err(SeminarError::validation)?;

        let mut state = self.state.write().await;

        // 场次必须存在；汇报形式以场次登记的类型为准，不信任调用方传入的值
        let presentation_type = match state.sessions.iter().find(|s| s.id == req.session_id) {
            Some(session) => session.presentation_type,
            None => {
                return Err(SeminarError::session_not_found(format!(
                    "Session '{}' does not exist",
                    req.session_id
                )));
            }
        };

        // 一个场次只允许一份提交；报名池已排除被绑定的场次，这里再做台账级兜底
        if state.submissions.iter().any(|s| s.session_id == req.session_id) {
            return Err(SeminarError::session_taken(format!(
                "Session '{}' is already taken by another registration",
                req.session_id
            )));
        }

        let submission = Submission {
            owner: owner.to_string(),
            title: req.title,
            presentation_type,
            status: SubmissionStatus::Pending,
            session_id: req.session_id,
            submitted_at: today,
            score: None,
            feedback: None,
            abstract_text: req.abstract_text,
            supervisor_name: req.supervisor_name,
            attachment_ref: req.attachment_ref,
        };
        state.submissions.push(submission.clone());
        self.persist(&state);
        Ok(submission)
    }

    pub(crate) async fn grade_submission_impl(
        &self,
        req: GradeSubmissionRequest,
    ) -> Result<Submission> {
        for score in req.rubric_scores {
            if !(0..=25).contains(&score) {
                return Err(SeminarError::validation(format!(
                    "Each rubric score must be between 0 and 25, got {score}"
                )));
            }
        }

        let mut state = self.state.write().await;

        // 以 (owner, title) 定位，取第一个匹配；重复评分直接覆盖，不留审计记录
        let submission = state
            .submissions
            .iter_mut()
            .find(|s| s.owner == req.owner && s.title == req.title)
            .ok_or_else(|| {
                SeminarError::submission_not_found(format!(
                    "No submission titled '{}' by '{}'",
                    req.title, req.owner
                ))
            })?;

        let total: i32 = req.rubric_scores.iter().sum();
        submission.status = SubmissionStatus::Graded;
        submission.score = Some(total);
        submission.feedback = Some(if req.feedback.is_empty() {
            DEFAULT_FEEDBACK.to_string()
        } else {
            req.feedback
        });

        let graded = submission.clone();
        self.persist(&state);
        Ok(graded)
    }

    pub(crate) async fn list_submissions_impl(&self) -> Result<Vec<Submission>> {
        let state = self.state.read().await;
        Ok(state.submissions.clone())
    }

    pub(crate) async fn list_submissions_by_owner_impl(&self, owner: &str) -> Result<Vec<Submission>> {
        let state = self.state.read().await;
        Ok(state
            .submissions
            .iter()
            .filter(|s| s.owner == owner)
            .cloned()
            .collect())
    }

    pub(crate) async fn list_submissions_assigned_to_impl(
        &self,
        evaluator: &str,
    ) -> Result<Vec<Submission>> {
        // 提交与场次在同一把读锁内连接，保证一致
        let state = self.state.read().await;
        let assigned: std::collections::HashSet<&str> = state
            .sessions
            .iter()
            .filter(|s| s.assigned_evaluator == evaluator)
            .map(|s| s.id.as_str())
            .collect();

        Ok(state
            .submissions
            .iter()
            .filter(|sub| assigned.contains(sub.session_id.as_str()))
            .cloned()
            .collect())
    }

    pub(crate) async fn get_submission_impl(
        &self,
        owner: &str,
        title: &str,
    ) -> Result<Option<Submission>> {
        let state = self.state.read().await;
        Ok(state
            .submissions
            .iter()
            .find(|s| s.owner == owner && s.title == title)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, Utc};

    use crate::models::sessions::entities::PresentationType;
    use crate::models::sessions::requests::CreateSessionRequest;
    use crate::models::users::entities::UserRole;
    use crate::models::users::requests::RegisterUserRequest;
    use crate::storage::snapshot_storage::test_support::test_storage;

    fn now() -> DateTime<Utc> {
        "2025-06-01T10:00:00Z".parse().unwrap()
    }

    fn today() -> NaiveDate {
        now().date_naive()
    }

    fn submit_req(title: &str, session_id: &str) -> CreateSubmissionRequest {
        CreateSubmissionRequest {
            title: title.to_string(),
            // 故意与场次类型不一致，存储层必须强制对齐
            presentation_type: PresentationType::Poster,
            session_id: session_id.to_string(),
            abstract_text: "We study widget entanglement.".to_string(),
            supervisor_name: "Dr. Smith".to_string(),
            attachment_ref: "/files/widgets.pdf".to_string(),
        }
    }

    // 准备一个分配给 eval1 的 Oral 场次 S001
    async fn seed_oral_session(storage: &crate::storage::snapshot_storage::SnapshotStorage) {
        storage
            .create_session_impl(
                CreateSessionRequest {
                    scheduled_at: now() + Duration::hours(1),
                    venue: "V1".to_string(),
                    presentation_type: PresentationType::Oral,
                    evaluator: "eval1".to_string(),
                },
                now(),
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_submit_forces_session_type() {
        let (storage, _dir) = test_storage();
        seed_oral_session(&storage).await;

        let submission = storage
            .create_submission_impl("alice", submit_req("Quantum Widgets", "S001"), today())
            .await
            .unwrap();

        // 调用方传了 Poster，但 S001 是 Oral 场次
        assert_eq!(submission.presentation_type, PresentationType::Oral);
        assert_eq!(submission.status, SubmissionStatus::Pending);
        assert!(submission.score.is_none());
        assert!(submission.feedback.is_none());
        assert_eq!(submission.submitted_at, today());
    }

    #[tokio::test]
    async fn test_submit_rejects_empty_fields() {
        let (storage, _dir) = test_storage();
        seed_oral_session(&storage).await;

        let mut req = submit_req("Quantum Widgets", "S001");
        req.supervisor_name = "  ".to_string();
        let err = storage
            .create_submission_impl("alice", req, today())
            .await
            .unwrap_err();
        assert!(matches!(err, SeminarError::Validation(_)));
        assert!(err.message().contains("Supervisor name"));
    }

    #[tokio::test]
    async fn test_submit_unknown_session() {
        let (storage, _dir) = test_storage();
        let err = storage
            .create_submission_impl("alice", submit_req("Quantum Widgets", "S042"), today())
            .await
            .unwrap_err();
        assert!(matches!(err, SeminarError::SessionNotFound(_)));
    }

    #[tokio::test]
    async fn test_one_submission_per_session() {
        let (storage, _dir) = test_storage();
        seed_oral_session(&storage).await;

        storage
            .create_submission_impl("alice", submit_req("Quantum Widgets", "S001"), today())
            .await
            .unwrap();

        let err = storage
            .create_submission_impl("bob", submit_req("Other Research", "S001"), today())
            .await
            .unwrap_err();
        assert!(matches!(err, SeminarError::SessionTaken(_)));
    }

    #[tokio::test]
    async fn test_bound_session_leaves_signup_pool() {
        let (storage, _dir) = test_storage();
        seed_oral_session(&storage).await;

        let open = storage.list_open_sessions_impl(now()).await.unwrap();
        assert_eq!(open.len(), 1);

        storage
            .create_submission_impl("alice", submit_req("Quantum Widgets", "S001"), today())
            .await
            .unwrap();

        let open = storage.list_open_sessions_impl(now()).await.unwrap();
        assert!(open.is_empty());
    }

    #[tokio::test]
    async fn test_grade_full_marks_with_default_feedback() {
        let (storage, _dir) = test_storage();
        seed_oral_session(&storage).await;
        storage
            .create_submission_impl("alice", submit_req("Quantum Widgets", "S001"), today())
            .await
            .unwrap();

        let graded = storage
            .grade_submission_impl(GradeSubmissionRequest {
                owner: "alice".to_string(),
                title: "Quantum Widgets".to_string(),
                rubric_scores: [25, 25, 25, 25],
                feedback: String::new(),
            })
            .await
            .unwrap();

        assert_eq!(graded.status, SubmissionStatus::Graded);
        assert_eq!(graded.score, Some(100));
        assert_eq!(graded.feedback.as_deref(), Some("Good job!"));
    }

    #[tokio::test]
    async fn test_regrade_overwrites_silently() {
        let (storage, _dir) = test_storage();
        seed_oral_session(&storage).await;
        storage
            .create_submission_impl("alice", submit_req("Quantum Widgets", "S001"), today())
            .await
            .unwrap();

        let grade = |scores: [i32; 4], feedback: &str| GradeSubmissionRequest {
            owner: "alice".to_string(),
            title: "Quantum Widgets".to_string(),
            rubric_scores: scores,
            feedback: feedback.to_string(),
        };

        storage
            .grade_submission_impl(grade([20, 20, 20, 20], "Solid work"))
            .await
            .unwrap();
        let regraded = storage
            .grade_submission_impl(grade([10, 10, 10, 10], "Second thoughts"))
            .await
            .unwrap();

        // 状态保持 Graded，分数与评语被覆盖
        assert_eq!(regraded.status, SubmissionStatus::Graded);
        assert_eq!(regraded.score, Some(40));
        assert_eq!(regraded.feedback.as_deref(), Some("Second thoughts"));
    }

    #[tokio::test]
    async fn test_grade_rejects_out_of_range_rubric() {
        let (storage, _dir) = test_storage();
        let err = storage
            .grade_submission_impl(GradeSubmissionRequest {
                owner: "alice".to_string(),
                title: "Quantum Widgets".to_string(),
                rubric_scores: [26, 0, 0, 0],
                feedback: String::new(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, SeminarError::Validation(_)));
    }

    #[tokio::test]
    async fn test_grade_unknown_submission() {
        let (storage, _dir) = test_storage();
        let err = storage
            .grade_submission_impl(GradeSubmissionRequest {
                owner: "alice".to_string(),
                title: "Nonexistent".to_string(),
                rubric_scores: [20, 20, 20, 20],
                feedback: String::new(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, SeminarError::SubmissionNotFound(_)));
    }

    #[tokio::test]
    async fn test_assigned_listing_follows_session_evaluator() {
        let (storage, _dir) = test_storage();
        storage
            .register_user_impl(RegisterUserRequest {
                username: "eval2".to_string(),
                password: "pw".to_string(),
                role: UserRole::Evaluator,
            })
            .await
            .unwrap();

        // S001 归 eval1，S002 归 eval2
        seed_oral_session(&storage).await;
        storage
            .create_session_impl(
                CreateSessionRequest {
                    scheduled_at: now() + Duration::hours(2),
                    venue: "V2".to_string(),
                    presentation_type: PresentationType::Poster,
                    evaluator: "eval2".to_string(),
                },
                now(),
            )
            .await
            .unwrap();

        storage
            .create_submission_impl("alice", submit_req("Quantum Widgets", "S001"), today())
            .await
            .unwrap();
        storage
            .create_submission_impl("bob", submit_req("Poster Things", "S002"), today())
            .await
            .unwrap();

        let for_eval1 = storage.list_submissions_assigned_to_impl("eval1").await.unwrap();
        assert_eq!(for_eval1.len(), 1);
        assert_eq!(for_eval1[0].owner, "alice");

        let for_eval2 = storage.list_submissions_assigned_to_impl("eval2").await.unwrap();
        assert_eq!(for_eval2.len(), 1);
        assert_eq!(for_eval2[0].owner, "bob");
    }
}
