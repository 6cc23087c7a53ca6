//! Store repositories
//!
//! Repositories handle all direct reads and writes of the store.

pub mod category_repo;
pub mod photo_repo;
pub mod user_repo;

pub use category_repo::CategoryRepository;
pub use photo_repo::PhotoRepository;
pub use user_repo::UserRepository;
