pub mod reviewer_handler;

pub use reviewer_handler::*;
