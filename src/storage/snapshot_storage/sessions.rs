//! 场次注册表聚合

use chrono::{DateTime, Duration, Utc};

use super::SnapshotStorage;
use crate::errors::{Result, SeminarError};
use crate::models::sessions::entities::{CONFLICT_WINDOW_MINUTES, Session, SessionStatus};
use crate::models::sessions::requests::CreateSessionRequest;
use crate::models::users::entities::UserRole;

impl SnapshotStorage {
    pub(crate) async fn create_session_impl(
        &self,
        req: CreateSessionRequest,
        now: DateTime<Utc>,
    ) -> Result<Session> {
        // 冲突扫描与追加必须在同一把写锁内完成
        let mut state = self.state.write().await;

        // 1. 评审必须已注册且角色为 Evaluator
        match state.users.get(&req.evaluator) {
            Some(u) if u.role == UserRole::Evaluator => {}
            _ => {
                return Err(SeminarError::unknown_evaluator(format!(
                    "'{}' is not a registered evaluator",
                    req.evaluator
                )));
            }
        }

        // 2. 开始时间必须严格晚于当前时间
        if req.scheduled_at <= now {
            return Err(SeminarError::past_schedule(
                "Cannot schedule a session in the past",
            ));
        }

        // 3. 与全部既有场次做对称窗口扫描，报告发现的第一个冲突
        let window = Duration::minutes(CONFLICT_WINDOW_MINUTES);
        for existing in &state.sessions {
            let gap = (req.scheduled_at - existing.scheduled_at).abs();
            if gap < window {
                if existing.venue == req.venue {
                    return Err(SeminarError::venue_conflict(format!(
                        "Venue {} is already booked at {} within the {}-min window",
                        req.venue,
                        existing.scheduled_at.format("%Y-%m-%d %H:%M"),
                        CONFLICT_WINDOW_MINUTES
                    )));
                }
                if existing.assigned_evaluator == req.evaluator {
                    return Err(SeminarError::evaluator_conflict(format!(
                        "Evaluator {} is already assigned to session {} within the {}-min window",
                        req.evaluator, existing.id, CONFLICT_WINDOW_MINUTES
                    )));
                }
            }
        }

        // 4. 按当前数量分配 ID；不支持删除，ID 不会被复用
        let session = Session {
            id: format!("S00{}", state.sessions.len() + 1),
            scheduled_at: req.scheduled_at,
            venue: req.venue,
            presentation_type: req.presentation_type,
            status: SessionStatus::Scheduled,
            assigned_evaluator: req.evaluator,
        };
        state.sessions.push(session.clone());
        self.persist(&state);
        Ok(session)
    }

    pub(crate) async fn get_session_by_id_impl(&self, id: &str) -> Result<Option<Session>> {
        let state = self.state.read().await;
        Ok(state.sessions.iter().find(|s| s.id == id).cloned())
    }

    pub(crate) async fn list_sessions_impl(&self) -> Result<Vec<Session>> {
        let state = self.state.read().await;
        Ok(state.sessions.clone())
    }

    pub(crate) async fn list_open_sessions_impl(&self, as_of: DateTime<Utc>) -> Result<Vec<Session>> {
        // 绑定集合与场次表在同一把读锁内取得，保证一致
        let state = self.state.read().await;
        let bound: std::collections::HashSet<&str> = state
            .submissions
            .iter()
            .map(|sub| sub.session_id.as_str())
            .collect();

        Ok(state
            .sessions
            .iter()
            .filter(|s| !bound.contains(s.id.as_str()) && s.scheduled_at > as_of)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sessions::entities::PresentationType;
    use crate::models::users::requests::RegisterUserRequest;
    use crate::storage::snapshot_storage::test_support::test_storage;

    fn session_req(
        scheduled_at: DateTime<Utc>,
        venue: &str,
        evaluator: &str,
    ) -> CreateSessionRequest {
        CreateSessionRequest {
            scheduled_at,
            venue: venue.to_string(),
            presentation_type: PresentationType::Oral,
            evaluator: evaluator.to_string(),
        }
    }

    async fn add_evaluator(storage: &SnapshotStorage, username: &str) {
        storage
            .register_user_impl(RegisterUserRequest {
                username: username.to_string(),
                password: "pw".to_string(),
                role: UserRole::Evaluator,
            })
            .await
            .unwrap();
    }

    fn t0() -> DateTime<Utc> {
        "2025-06-01T10:00:00Z".parse().unwrap()
    }

    #[tokio::test]
    async fn test_conflict_matrix() {
        let (storage, _dir) = test_storage();
        add_evaluator(&storage, "eval2").await;
        let now = t0();
        let start = now + Duration::hours(1);

        // 首个场次分配 S001
        let first = storage
            .create_session_impl(session_req(start, "V1", "eval1"), now)
            .await
            .unwrap();
        assert_eq!(first.id, "S001");
        assert_eq!(first.status, SessionStatus::Scheduled);

        // 同场地、10 分钟内 → 场地冲突
        let err = storage
            .create_session_impl(session_req(start + Duration::minutes(10), "V1", "eval2"), now)
            .await
            .unwrap_err();
        assert!(matches!(err, SeminarError::VenueConflict(_)));

        // 不同场地、同评审、10 分钟内 → 评审冲突
        let err = storage
            .create_session_impl(session_req(start + Duration::minutes(10), "V2", "eval1"), now)
            .await
            .unwrap_err();
        assert!(matches!(err, SeminarError::EvaluatorConflict(_)));

        // 同场地同评审但相隔 30 分钟 → 成功
        let fourth = storage
            .create_session_impl(session_req(start + Duration::minutes(30), "V1", "eval1"), now)
            .await
            .unwrap();
        assert_eq!(fourth.id, "S002");
    }

    #[tokio::test]
    async fn test_conflict_invariant_holds_pairwise() {
        let (storage, _dir) = test_storage();
        add_evaluator(&storage, "eval2").await;
        add_evaluator(&storage, "eval3").await;
        let now = t0();

        let reqs = [
            session_req(now + Duration::minutes(60), "V1", "eval1"),
            session_req(now + Duration::minutes(75), "V2", "eval2"),
            session_req(now + Duration::minutes(90), "V3", "eval3"),
            // 与 S002 相距 19 分钟且同场地，必须被拒绝
            session_req(now + Duration::minutes(94), "V2", "eval1"),
        ];
        let mut created = Vec::new();
        for req in reqs {
            if let Ok(s) = storage.create_session_impl(req, now).await {
                created.push(s);
            }
        }
        assert_eq!(created.len(), 3);

        // 成功创建的场次之间两两满足不变式
        let window = Duration::minutes(CONFLICT_WINDOW_MINUTES);
        for a in &created {
            for b in &created {
                if a.id == b.id {
                    continue;
                }
                let close = (a.scheduled_at - b.scheduled_at).abs() < window;
                let clash = a.venue == b.venue || a.assigned_evaluator == b.assigned_evaluator;
                assert!(!(close && clash), "sessions {} and {} conflict", a.id, b.id);
            }
        }
    }

    #[tokio::test]
    async fn test_past_schedule_rejected() {
        let (storage, _dir) = test_storage();
        let now = t0();

        // 恰好等于当前时间也算过期
        let err = storage
            .create_session_impl(session_req(now, "V1", "eval1"), now)
            .await
            .unwrap_err();
        assert!(matches!(err, SeminarError::PastSchedule(_)));

        let err = storage
            .create_session_impl(session_req(now - Duration::minutes(5), "V1", "eval1"), now)
            .await
            .unwrap_err();
        assert!(matches!(err, SeminarError::PastSchedule(_)));
    }

    #[tokio::test]
    async fn test_unknown_evaluator_rejected() {
        let (storage, _dir) = test_storage();
        let now = t0();

        // 未注册用户
        let err = storage
            .create_session_impl(session_req(now + Duration::hours(1), "V1", "ghost"), now)
            .await
            .unwrap_err();
        assert!(matches!(err, SeminarError::UnknownEvaluator(_)));

        // 已注册但不是评审角色
        let err = storage
            .create_session_impl(session_req(now + Duration::hours(1), "V1", "student1"), now)
            .await
            .unwrap_err();
        assert!(matches!(err, SeminarError::UnknownEvaluator(_)));
    }

    #[tokio::test]
    async fn test_open_sessions_excludes_past_and_keeps_order() {
        let (storage, _dir) = test_storage();
        add_evaluator(&storage, "eval2").await;
        let now = t0();

        let s1 = storage
            .create_session_impl(session_req(now + Duration::hours(2), "V1", "eval1"), now)
            .await
            .unwrap();
        let s2 = storage
            .create_session_impl(session_req(now + Duration::hours(3), "V2", "eval2"), now)
            .await
            .unwrap();

        // 以迟于 s1 的时间点查询，s1 不再开放
        let open = storage
            .list_open_sessions_impl(now + Duration::minutes(150))
            .await
            .unwrap();
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].id, s2.id);

        // 更早的时间点则两个都开放，且保持创建顺序
        let open = storage.list_open_sessions_impl(now).await.unwrap();
        assert_eq!(
            open.iter().map(|s| s.id.as_str()).collect::<Vec<_>>(),
            vec![s1.id.as_str(), s2.id.as_str()]
        );
    }

    #[tokio::test]
    async fn test_lookup_by_id() {
        let (storage, _dir) = test_storage();
        let now = t0();
        storage
            .create_session_impl(session_req(now + Duration::hours(1), "V1", "eval1"), now)
            .await
            .unwrap();

        assert!(storage.get_session_by_id_impl("S001").await.unwrap().is_some());
        assert!(storage.get_session_by_id_impl("S999").await.unwrap().is_none());
    }
}
