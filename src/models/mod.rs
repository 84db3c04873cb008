pub mod auth;
pub mod common;
pub mod sessions;
pub mod submissions;
pub mod users;
pub mod views;

pub use common::{ApiResponse, ErrorCode};
