//! Estimated delivery dates

use chrono::{DateTime, Duration, Utc};

use landbridge_types::DeliverySpeed;

/// Days from order creation to expected delivery
pub fn delivery_days(speed: DeliverySpeed) -> i64 {
    match speed {
        DeliverySpeed::Express => 1,
        DeliverySpeed::TimeSpecified => 2,
        DeliverySpeed::Normal => 3,
    }
}

pub fn estimated_delivery(speed: DeliverySpeed, now: DateTime<Utc>) -> DateTime<Utc> {
    now + Duration::days(delivery_days(speed))
}
