//! Order records and their enumerated status/type sets.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constraint::{self, ConstraintViolation};
use crate::money;

pub const CUSTOMER_NAME_MAX: usize = 255;
pub const EMAIL_MAX: usize = 255;
pub const PHONE_NUMBER_MAX: usize = 15;
pub const ADDRESS_MAX: usize = 255;
pub const CITY_MAX: usize = 255;
pub const STATE_MAX: usize = 100;
pub const POSTAL_CODE_MAX: usize = 20;
pub const COUNTRY_MAX: usize = 100;
pub const SPECIAL_INSTRUCTIONS_MAX: usize = 1000;
pub const REFERENCE_NUMBER_MAX: usize = 100;
pub const PAYMENT_METHOD_MAX: usize = 50;
pub const PAYMENT_REFERENCE_MAX: usize = 100;
pub const PROMO_CODE_MAX: usize = 50;
pub const BUSINESS_NOTES_MAX: usize = 1000;

/// Default country for the optional address block.
pub const DEFAULT_COUNTRY: &str = "US";

/// Fulfilment state of an order. Legal values only, no transition rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    InProgress,
    Ready,
    Completed,
    Cancelled,
    Refunded,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 7] = [
        Self::Pending,
        Self::Confirmed,
        Self::InProgress,
        Self::Ready,
        Self::Completed,
        Self::Cancelled,
        Self::Refunded,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::InProgress => "in_progress",
            Self::Ready => "ready",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Refunded => "refunded",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = ConstraintViolation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "in_progress" => Ok(Self::InProgress),
            "ready" => Ok(Self::Ready),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            "refunded" => Ok(Self::Refunded),
            other => Err(ConstraintViolation::UnknownValue {
                field: "order status",
                value: other.to_owned(),
            }),
        }
    }
}

/// How an order is fulfilled, generalized across business types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    #[default]
    Pickup,
    Delivery,
    DineIn,
    Online,
    InStore,
    Service,
}

impl OrderType {
    pub const ALL: [OrderType; 6] = [
        Self::Pickup,
        Self::Delivery,
        Self::DineIn,
        Self::Online,
        Self::InStore,
        Self::Service,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pickup => "pickup",
            Self::Delivery => "delivery",
            Self::DineIn => "dine_in",
            Self::Online => "online",
            Self::InStore => "in_store",
            Self::Service => "service",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderType {
    type Err = ConstraintViolation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pickup" => Ok(Self::Pickup),
            "delivery" => Ok(Self::Delivery),
            "dine_in" => Ok(Self::DineIn),
            "online" => Ok(Self::Online),
            "in_store" => Ok(Self::InStore),
            "service" => Ok(Self::Service),
            other => Err(ConstraintViolation::UnknownValue {
                field: "order type",
                value: other.to_owned(),
            }),
        }
    }
}

/// Payment state, tracked independently of [`OrderStatus`].
///
/// The schema permits any combination (a completed order with a failed
/// payment included); policing combinations is a business-logic concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Failed,
    Refunded,
}

impl PaymentStatus {
    pub const ALL: [PaymentStatus; 4] =
        [Self::Pending, Self::Paid, Self::Failed, Self::Refunded];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Failed => "failed",
            Self::Refunded => "refunded",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = ConstraintViolation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "paid" => Ok(Self::Paid),
            "failed" => Ok(Self::Failed),
            "refunded" => Ok(Self::Refunded),
            other => Err(ConstraintViolation::UnknownValue {
                field: "payment status",
                value: other.to_owned(),
            }),
        }
    }
}

/// A commercial transaction: pickup, delivery, dine-in, online, in-store,
/// or service work.
///
/// Customer contact fields are duplicated inline so a guest can order
/// without an account. No in-schema invariant ties `total_amount` to the
/// other monetary fields; callers maintain
/// `subtotal + tax + service_fee - discount + tip = total_amount`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: Uuid,
    /// Weak reference to a user; `None` means a guest order.
    pub user_id: Option<Uuid>,
    pub customer_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub order_type: OrderType,
    pub subtotal: Decimal,
    pub tax_amount: Decimal,
    pub service_fee: Decimal,
    pub discount_amount: Decimal,
    pub tip_amount: Decimal,
    pub total_amount: Decimal,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub created_at: DateTime<Utc>,
    /// Callers must refresh this on every mutation.
    pub updated_at: DateTime<Utc>,
    /// Pickup time, delivery time, or appointment; no ordering enforced
    /// against `created_at`.
    pub scheduled_for: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub special_instructions: Option<String>,
    /// Table number, confirmation code, and the like.
    pub reference_number: Option<String>,
    pub payment_method: Option<String>,
    pub payment_reference: Option<String>,
    pub promo_code: Option<String>,
    /// Internal notes, never shown to the customer.
    pub business_notes: Option<String>,
}

impl Order {
    /// Build an order with a generated id and every default applied:
    /// `pickup` type, `pending` status and payment status, zero tax, fee,
    /// discount and tip, country `"US"`, timestamps set to now.
    pub fn new(
        customer_name: String,
        email: String,
        subtotal: Decimal,
        total_amount: Decimal,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id: None,
            customer_name,
            email,
            phone_number: None,
            address: None,
            city: None,
            state: None,
            postal_code: None,
            country: Some(DEFAULT_COUNTRY.to_owned()),
            order_type: OrderType::default(),
            subtotal,
            tax_amount: Decimal::ZERO,
            service_fee: Decimal::ZERO,
            discount_amount: Decimal::ZERO,
            tip_amount: Decimal::ZERO,
            total_amount,
            status: OrderStatus::default(),
            payment_status: PaymentStatus::default(),
            created_at: now,
            updated_at: now,
            scheduled_for: None,
            completed_at: None,
            special_instructions: None,
            reference_number: None,
            payment_method: None,
            payment_reference: None,
            promo_code: None,
            business_notes: None,
        }
    }

    /// Re-check every declared field constraint.
    ///
    /// Run after any mutation, not only at construction. Deliberately does
    /// not relate `total_amount` to the other monetary fields, nor `status`
    /// to `payment_status`.
    pub fn validate(&self) -> Result<(), ConstraintViolation> {
        constraint::max_len("customer_name", &self.customer_name, CUSTOMER_NAME_MAX)?;
        constraint::max_len("email", &self.email, EMAIL_MAX)?;
        constraint::max_len_opt("phone_number", self.phone_number.as_deref(), PHONE_NUMBER_MAX)?;
        constraint::max_len_opt("address", self.address.as_deref(), ADDRESS_MAX)?;
        constraint::max_len_opt("city", self.city.as_deref(), CITY_MAX)?;
        constraint::max_len_opt("state", self.state.as_deref(), STATE_MAX)?;
        constraint::max_len_opt("postal_code", self.postal_code.as_deref(), POSTAL_CODE_MAX)?;
        constraint::max_len_opt("country", self.country.as_deref(), COUNTRY_MAX)?;
        money::check("subtotal", self.subtotal)?;
        money::check("tax_amount", self.tax_amount)?;
        money::check("service_fee", self.service_fee)?;
        money::check("discount_amount", self.discount_amount)?;
        money::check("tip_amount", self.tip_amount)?;
        money::check("total_amount", self.total_amount)?;
        constraint::max_len_opt(
            "special_instructions",
            self.special_instructions.as_deref(),
            SPECIAL_INSTRUCTIONS_MAX,
        )?;
        constraint::max_len_opt(
            "reference_number",
            self.reference_number.as_deref(),
            REFERENCE_NUMBER_MAX,
        )?;
        constraint::max_len_opt(
            "payment_method",
            self.payment_method.as_deref(),
            PAYMENT_METHOD_MAX,
        )?;
        constraint::max_len_opt(
            "payment_reference",
            self.payment_reference.as_deref(),
            PAYMENT_REFERENCE_MAX,
        )?;
        constraint::max_len_opt("promo_code", self.promo_code.as_deref(), PROMO_CODE_MAX)?;
        constraint::max_len_opt(
            "business_notes",
            self.business_notes.as_deref(),
            BUSINESS_NOTES_MAX,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Order {
        Order::new(
            "Carol Customer".to_owned(),
            "carol@example.com".to_owned(),
            Decimal::new(1000, 2), // 10.00
            Decimal::new(1000, 2),
        )
    }

    #[test]
    fn should_apply_every_default_on_new_order() {
        let order = sample();
        assert_eq!(order.tax_amount, Decimal::ZERO);
        assert_eq!(order.service_fee, Decimal::ZERO);
        assert_eq!(order.discount_amount, Decimal::ZERO);
        assert_eq!(order.tip_amount, Decimal::ZERO);
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.payment_status, PaymentStatus::Pending);
        assert_eq!(order.order_type, OrderType::Pickup);
        assert_eq!(order.country.as_deref(), Some("US"));
        assert_eq!(order.user_id, None);
    }

    #[test]
    fn should_validate_guest_order_without_user() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn should_assign_status_and_payment_status_independently() {
        let mut order = sample();
        for status in OrderStatus::ALL {
            for payment_status in PaymentStatus::ALL {
                order.status = status;
                order.payment_status = payment_status;
                assert!(order.validate().is_ok());
            }
        }
    }

    #[test]
    fn should_not_relate_total_amount_to_constituents() {
        let mut order = sample();
        order.tip_amount = Decimal::new(500, 2); // total left untouched
        assert!(order.validate().is_ok());
    }

    #[test]
    fn should_reject_subtotal_with_three_fractional_digits() {
        let mut order = sample();
        order.subtotal = Decimal::new(10_001, 3); // 10.001
        assert_eq!(
            order.validate(),
            Err(ConstraintViolation::ScaleExceeded { field: "subtotal" })
        );
    }

    #[test]
    fn should_reject_total_amount_over_eight_integer_digits() {
        let mut order = sample();
        order.total_amount = Decimal::new(10_000_000_000, 2); // 100_000_000.00
        assert!(order.validate().is_err());
    }

    #[test]
    fn should_reject_promo_code_over_50_chars() {
        let mut order = sample();
        order.promo_code = Some("X".repeat(51));
        assert!(order.validate().is_err());
    }

    #[test]
    fn should_serialize_enums_as_snake_case() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
        assert_eq!(
            serde_json::to_string(&OrderType::DineIn).unwrap(),
            "\"dine_in\""
        );
        assert_eq!(
            serde_json::to_string(&PaymentStatus::Paid).unwrap(),
            "\"paid\""
        );
    }

    #[test]
    fn should_round_trip_every_enum_value_via_str() {
        for status in OrderStatus::ALL {
            assert_eq!(status.as_str().parse::<OrderStatus>().unwrap(), status);
        }
        for order_type in OrderType::ALL {
            assert_eq!(order_type.as_str().parse::<OrderType>().unwrap(), order_type);
        }
        for payment_status in PaymentStatus::ALL {
            assert_eq!(
                payment_status.as_str().parse::<PaymentStatus>().unwrap(),
                payment_status
            );
        }
    }

    #[test]
    fn should_reject_unknown_enum_strings() {
        assert!("shipped".parse::<OrderStatus>().is_err());
        assert!("drive_thru".parse::<OrderType>().is_err());
        assert!("authorized".parse::<PaymentStatus>().is_err());
    }
}
