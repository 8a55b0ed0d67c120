pub mod reviewer_dto;

pub use reviewer_dto::{ReviewerResponseDto, UpsertReviewerDto};
