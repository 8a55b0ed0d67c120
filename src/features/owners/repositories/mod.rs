pub mod owner_repository;

pub use owner_repository::{OwnerRepository, PgOwnerRepository};
