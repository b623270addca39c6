//! Standard error messages for consistent error responses.

pub const INTERNAL_ERROR: &str = "Internal server error";
pub const NOT_FOUND_RESOURCE: &str = "The requested resource was not found";
