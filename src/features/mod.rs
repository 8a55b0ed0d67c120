pub mod auth;
pub mod categories;
pub mod countries;
pub mod owners;
pub mod pokemon;
pub mod reviewers;
pub mod reviews;
