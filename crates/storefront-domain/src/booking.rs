//! Booking records and their status set.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constraint::{self, ConstraintViolation};
use crate::money;

pub const CLIENT_NAME_MAX: usize = 255;
pub const EMAIL_MAX: usize = 255;
pub const PHONE_MAX: usize = 20;
pub const SERVICE_TYPE_MAX: usize = 100;
pub const NOTES_MAX: usize = 1000;
pub const OWNER_NAME_MAX: usize = 255;
pub const ADDRESS_MAX: usize = 255;

/// Lifecycle state of a booking.
///
/// The schema defines legal values only; any value may follow any other.
/// Transition legality is a calling-layer concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 4] = [
        Self::Pending,
        Self::Confirmed,
        Self::Cancelled,
        Self::Completed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = ConstraintViolation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "cancelled" => Ok(Self::Cancelled),
            "completed" => Ok(Self::Completed),
            other => Err(ConstraintViolation::UnknownValue {
                field: "booking status",
                value: other.to_owned(),
            }),
        }
    }
}

/// A scheduled appointment or reservation, optionally linked to a user.
///
/// Client contact fields are duplicated from [`crate::user::User`] on
/// purpose so a booking can exist without a registered account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub id: Uuid,
    pub client_name: String,
    pub email: String,
    pub phone: Option<String>,
    /// No in-schema check that `end_time > start_time`.
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub service_type: Option<String>,
    pub notes: Option<String>,
    /// The business being booked.
    pub owner_name: String,
    pub address: String,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    /// Callers must refresh this on every mutation.
    pub updated_at: DateTime<Utc>,
    /// Weak reference to a user; `None` means a guest booking.
    pub user_id: Option<Uuid>,
    pub estimated_price: Option<Decimal>,
    pub final_price: Option<Decimal>,
}

impl Booking {
    /// Build a booking with a generated id and every default applied:
    /// status `pending`, timestamps set to now, no user link, no prices.
    pub fn new(
        client_name: String,
        email: String,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        owner_name: String,
        address: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            client_name,
            email,
            phone: None,
            start_time,
            end_time,
            service_type: None,
            notes: None,
            owner_name,
            address,
            status: BookingStatus::default(),
            created_at: now,
            updated_at: now,
            user_id: None,
            estimated_price: None,
            final_price: None,
        }
    }

    /// Re-check every declared field constraint.
    ///
    /// Run after any mutation, not only at construction.
    pub fn validate(&self) -> Result<(), ConstraintViolation> {
        constraint::max_len("client_name", &self.client_name, CLIENT_NAME_MAX)?;
        constraint::max_len("email", &self.email, EMAIL_MAX)?;
        constraint::max_len_opt("phone", self.phone.as_deref(), PHONE_MAX)?;
        constraint::max_len_opt("service_type", self.service_type.as_deref(), SERVICE_TYPE_MAX)?;
        constraint::max_len_opt("notes", self.notes.as_deref(), NOTES_MAX)?;
        constraint::max_len("owner_name", &self.owner_name, OWNER_NAME_MAX)?;
        constraint::max_len("address", &self.address, ADDRESS_MAX)?;
        money::check_opt("estimated_price", self.estimated_price)?;
        money::check_opt("final_price", self.final_price)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Booking {
        let now = Utc::now();
        Booking::new(
            "Bob Client".to_owned(),
            "bob@example.com".to_owned(),
            now,
            now + chrono::Duration::hours(1),
            "Cut Above Barbers".to_owned(),
            "1 High Street".to_owned(),
        )
    }

    #[test]
    fn should_default_new_booking_to_pending_guest() {
        let booking = sample();
        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.user_id, None);
        assert_eq!(booking.phone, None);
        assert_eq!(booking.estimated_price, None);
        assert_eq!(booking.final_price, None);
    }

    #[test]
    fn should_validate_guest_booking_without_user() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn should_accept_reversed_time_range() {
        // end_time > start_time is a business-logic concern, not a schema one.
        let mut booking = sample();
        std::mem::swap(&mut booking.start_time, &mut booking.end_time);
        assert!(booking.validate().is_ok());
    }

    #[test]
    fn should_accept_any_status_after_any_other() {
        let mut booking = sample();
        booking.status = BookingStatus::Completed;
        assert!(booking.validate().is_ok());
        booking.status = BookingStatus::Pending;
        assert!(booking.validate().is_ok());
    }

    #[test]
    fn should_reject_notes_over_1000_chars() {
        let mut booking = sample();
        booking.notes = Some("n".repeat(1001));
        assert!(booking.validate().is_err());
    }

    #[test]
    fn should_reject_estimated_price_with_three_fractional_digits() {
        let mut booking = sample();
        booking.estimated_price = Some(Decimal::new(19_995, 3)); // 19.995
        assert_eq!(
            booking.validate(),
            Err(ConstraintViolation::ScaleExceeded {
                field: "estimated_price"
            })
        );
    }

    #[test]
    fn should_serialize_status_as_snake_case() {
        assert_eq!(
            serde_json::to_string(&BookingStatus::Confirmed).unwrap(),
            "\"confirmed\""
        );
    }

    #[test]
    fn should_round_trip_every_status_via_str() {
        for status in BookingStatus::ALL {
            assert_eq!(status.as_str().parse::<BookingStatus>().unwrap(), status);
        }
    }

    #[test]
    fn should_reject_unknown_status_string() {
        assert!("on_hold".parse::<BookingStatus>().is_err());
    }
}
