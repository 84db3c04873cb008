pub mod candidates;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::views::requests::AwardCandidatesQuery;
use crate::storage::Storage;

pub struct AwardService {
    storage: Option<Arc<dyn Storage>>,
}

impl AwardService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    /// 奖项候选人列表
    pub async fn list_candidates(
        &self,
        request: &HttpRequest,
        query: AwardCandidatesQuery,
    ) -> ActixResult<HttpResponse> {
        candidates::list_candidates(self, request, query).await
    }
}
