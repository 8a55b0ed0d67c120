use sqlx::FromRow;

/// Database model for country
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Country {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct NewCountry {
    pub name: String,
}
