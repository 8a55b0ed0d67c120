pub mod reviewer;

pub use reviewer::{NewReviewer, Reviewer};
