//! 角色视图投影：对当前状态的纯函数推导，每次请求即时重算，自身不持有状态

pub mod coordinator;
pub mod evaluator;
pub mod student;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::Storage;

pub struct ViewService {
    storage: Option<Arc<dyn Storage>>,
}

impl ViewService {
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

    /// 学生视图：本人提交及反馈标记
    pub async fn student_view(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        student::student_view(self, request).await
    }

    /// 评审视图：分配队列与可评分子集
    pub async fn evaluator_view(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        evaluator::evaluator_view(self, request).await
    }

    /// 协调员视图：完整提交/场次/用户表
    pub async fn coordinator_view(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        coordinator::coordinator_view(self, request).await
    }
}
