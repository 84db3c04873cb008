pub mod create;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::sessions::requests::CreateSessionRequest;
use crate::storage::Storage;

pub struct SessionService {
    storage: Option<Arc<dyn Storage>>,
}

impl SessionService {
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

    /// 创建场次（协调员）
    pub async fn create_session(
        &self,
        request: &HttpRequest,
        req: CreateSessionRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_session(self, request, req).await
    }

    /// 列出全部场次
    pub async fn list_sessions(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_sessions(self, request).await
    }

    /// 列出报名池（未绑定且未开始的场次）
    pub async fn list_open_sessions(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_open_sessions(self, request).await
    }

    /// 按ID获取场次
    pub async fn get_session(
        &self,
        request: &HttpRequest,
        session_id: String,
    ) -> ActixResult<HttpResponse> {
        list::get_session(self, request, session_id).await
    }
}
