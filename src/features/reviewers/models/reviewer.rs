use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Reviewer {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone)]
pub struct NewReviewer {
    pub first_name: String,
    pub last_name: String,
}
