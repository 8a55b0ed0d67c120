pub mod owner_dto;

pub use owner_dto::{CreateOwnerDto, CreateOwnerQuery, OwnerResponseDto, UpdateOwnerDto};
