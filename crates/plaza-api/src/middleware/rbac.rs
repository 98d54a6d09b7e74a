//! Role-based route guarding helpers.

use plaza_core::error::AppError;

use crate::error::ApiError;
use crate::extractors::AuthUser;

/// Checks that the authenticated user has the Admin role.
///
/// Deliberately not applied to the admin deletion route, whose
/// authorization checks are ordered inside the service.
pub fn require_admin(auth: &AuthUser) -> Result<(), ApiError> {
    if !auth.is_admin() {
        return Err(ApiError(AppError::forbidden("Admin access required")));
    }
    Ok(())
}
