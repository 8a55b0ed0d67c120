pub mod auth_dto;

pub use auth_dto::{GreetingDto, LoginRequestDto, LoginResponseDto};
