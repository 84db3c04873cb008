pub mod auth;
pub mod awards;
pub mod sessions;
pub mod submissions;
pub mod users;
pub mod views;

pub use auth::AuthService;
pub use awards::AwardService;
pub use sessions::SessionService;
pub use submissions::SubmissionService;
pub use users::UserService;
pub use views::ViewService;
