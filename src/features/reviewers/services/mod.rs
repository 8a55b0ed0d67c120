pub mod reviewer_service;

pub use reviewer_service::ReviewerService;
