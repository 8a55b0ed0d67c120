/// Lowest accepted review rating
pub const MIN_RATING: i32 = 1;

/// Highest accepted review rating
pub const MAX_RATING: i32 = 10;

/// Message returned by every successful create
pub const CREATED_MESSAGE: &str = "Successfully created";

// =============================================================================
// ROLE CONSTANTS
// =============================================================================

/// Administrator role - may call the admin greeting endpoint
pub const ROLE_ADMINISTRATOR: &str = "Administrator";

/// Regular user role
pub const ROLE_USER: &str = "User";
