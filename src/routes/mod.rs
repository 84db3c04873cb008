pub mod auth;

pub mod users;

pub mod sessions;

pub mod submissions;

pub mod views;

pub mod awards;

pub use auth::configure_auth_routes;
pub use awards::configure_award_routes;
pub use sessions::configure_session_routes;
pub use submissions::configure_submission_routes;
pub use users::configure_user_routes;
pub use views::configure_view_routes;
