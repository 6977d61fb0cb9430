//! User account records.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::constraint::{self, ConstraintViolation};

pub const NAME_MAX: usize = 100;
pub const EMAIL_MAX: usize = 255;
pub const PHONE_NUMBER_MAX: usize = 15;
pub const ROLE_MAX: usize = 5;

/// An account holder.
///
/// Bookings and orders may reference a user, but both work without one:
/// guest flows duplicate the contact fields inline instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Globally unique, never reassigned.
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    /// Short role code (e.g. "admin"), not an enumerated type.
    pub role: String,
    pub created_at: DateTime<Utc>,
    /// Callers must refresh this on every mutation.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Build a user with a freshly generated id.
    ///
    /// Unlike the other record types, timestamps carry no creation-time
    /// default here; the registration process supplies both.
    pub fn new(
        name: String,
        email: String,
        phone_number: String,
        role: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            phone_number,
            role,
            created_at,
            updated_at,
        }
    }

    /// Re-check every declared field constraint.
    ///
    /// Run after any mutation, not only at construction.
    pub fn validate(&self) -> Result<(), ConstraintViolation> {
        constraint::max_len("name", &self.name, NAME_MAX)?;
        constraint::max_len("email", &self.email, EMAIL_MAX)?;
        constraint::max_len("phone_number", &self.phone_number, PHONE_NUMBER_MAX)?;
        constraint::max_len("role", &self.role, ROLE_MAX)?;
        Ok(())
    }
}
