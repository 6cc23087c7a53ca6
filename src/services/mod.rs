//! Business logic services

pub mod auth_service;
pub mod category_service;
pub mod photo_service;
pub mod ranking_service;
pub mod user_service;

pub use auth_service::AuthService;
pub use category_service::CategoryService;
pub use photo_service::PhotoService;
pub use ranking_service::RankingService;
pub use user_service::UserService;
