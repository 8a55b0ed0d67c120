pub mod review_dto;

pub use review_dto::{
    CreateReviewQuery, DeleteReviewsDto, DeleteReviewsResponseDto, ReviewResponseDto,
    UpsertReviewDto,
};
