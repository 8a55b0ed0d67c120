pub mod reviewer_repository;

pub use reviewer_repository::{PgReviewerRepository, ReviewerRepository};
