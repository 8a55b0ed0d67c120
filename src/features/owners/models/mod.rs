pub mod owner;

pub use owner::{NewOwner, Owner};
