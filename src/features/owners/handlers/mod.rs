pub mod owner_handler;

pub use owner_handler::*;
