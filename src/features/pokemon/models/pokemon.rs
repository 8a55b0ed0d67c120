use chrono::NaiveDate;
use sqlx::FromRow;

/// Database model for a pokemon
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Pokemon {
    pub id: i32,
    pub name: String,
    pub birth_date: NaiveDate,
}

/// Editable pokemon fields, used for both insert and update
#[derive(Debug, Clone)]
pub struct NewPokemon {
    pub name: String,
    pub birth_date: NaiveDate,
}
