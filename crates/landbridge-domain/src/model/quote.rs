//! Quote input types

use serde::{Deserialize, Serialize};

use landbridge_types::{DeliverySpeed, Dimensions};

/// Physical description of a package
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PackageSpec {
    pub weight_kg: f64,
    pub dimensions: Dimensions,
    /// 壊れ物 (informational, no price effect)
    pub fragile: bool,
    pub insurance: bool,
}

/// Everything the fee calculator accepts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub package: PackageSpec,
    pub delivery_speed: DeliverySpeed,
    pub sender_postal_code: String,
    pub recipient_postal_code: String,
}
