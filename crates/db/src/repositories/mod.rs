//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod dashboard_repo;
pub mod game_repo;
pub mod media_repo;
pub mod player_repo;
pub mod session_repo;
pub mod sport_repo;
pub mod story_repo;
pub mod user_repo;

pub use dashboard_repo::DashboardRepo;
pub use game_repo::GameRepo;
pub use media_repo::MediaRepo;
pub use player_repo::PlayerRepo;
pub use session_repo::SessionRepo;
pub use sport_repo::SportRepo;
pub use story_repo::StoryRepo;
pub use user_repo::UserRepo;
