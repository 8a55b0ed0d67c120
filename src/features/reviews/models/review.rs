use sqlx::FromRow;

/// Database model for review
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Review {
    pub id: i32,
    pub title: String,
    pub text: String,
    pub rating: i32,
    pub pokemon_id: i32,
    pub reviewer_id: i32,
}

#[derive(Debug, Clone)]
pub struct NewReview {
    pub title: String,
    pub text: String,
    pub rating: i32,
    pub pokemon_id: i32,
    pub reviewer_id: i32,
}

/// Editable review fields; the pokemon and reviewer are fixed at creation
#[derive(Debug, Clone)]
pub struct ReviewChanges {
    pub title: String,
    pub text: String,
    pub rating: i32,
}
