use sqlx::FromRow;

/// Database model for owner
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Owner {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub gym: Option<String>,
    pub country_id: i32,
}

#[derive(Debug, Clone)]
pub struct NewOwner {
    pub first_name: String,
    pub last_name: String,
    pub gym: Option<String>,
    pub country_id: i32,
}
