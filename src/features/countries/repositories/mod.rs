pub mod country_repository;

pub use country_repository::{CountryRepository, PgCountryRepository};
