pub mod owner_service;

pub use owner_service::OwnerService;
