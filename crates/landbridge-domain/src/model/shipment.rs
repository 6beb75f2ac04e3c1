//! In-progress shipment request, filled in across the wizard steps

use serde::{Deserialize, Serialize};

use super::quote::{PackageSpec, QuoteRequest};
use landbridge_types::{Address, DeliverySpeed, Dimensions, PackageType};

pub const DEFAULT_COUNTRY: &str = "日本";

/// Sender or recipient sub-form. Empty strings mean "not entered".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactAddress {
    pub name: String,
    pub phone: String,
    pub postal_code: String,
    /// 都道府県
    pub prefecture: String,
    /// 市区町村
    pub city: String,
    /// 番地
    pub address1: String,
    /// 建物名など
    #[serde(default)]
    pub address2: Option<String>,
}

impl ContactAddress {
    pub fn has_postal_code(&self) -> bool {
        !self.postal_code.trim().is_empty()
    }

    /// Convert into the stored address shape
    pub fn to_address(&self) -> Address {
        let street = format!(
            "{} {}",
            self.address1,
            self.address2.as_deref().unwrap_or("")
        )
        .trim()
        .to_string();

        Address {
            street,
            city: self.city.clone(),
            state: self.prefecture.clone(),
            zip_code: self.postal_code.clone(),
            country: DEFAULT_COUNTRY.to_string(),
        }
    }
}

/// Package fields as entered; `None` until the user fills them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PackageDraft {
    pub package_type: PackageType,
    pub weight_kg: Option<f64>,
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub fragile: bool,
    pub insurance: bool,
}

impl PackageDraft {
    pub fn dimensions(&self) -> Option<Dimensions> {
        Some(Dimensions::new(self.length?, self.width?, self.height?))
    }

    pub fn spec(&self) -> Option<PackageSpec> {
        Some(PackageSpec {
            weight_kg: self.weight_kg?,
            dimensions: self.dimensions()?,
            fragile: self.fragile,
            insurance: self.insurance,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShipmentDraft {
    pub package: PackageDraft,
    pub sender: ContactAddress,
    pub recipient: ContactAddress,
    pub delivery_speed: DeliverySpeed,
}

impl ShipmentDraft {
    /// Build a quote request once weight, all three dimensions and both
    /// postal codes are present. Zero values count as missing.
    pub fn quote_request(&self) -> Option<QuoteRequest> {
        let spec = self.package.spec()?;
        let dims = spec.dimensions;
        let entered = |v: f64| v != 0.0 && !v.is_nan();
        if !entered(spec.weight_kg)
            || !entered(dims.length)
            || !entered(dims.width)
            || !entered(dims.height)
        {
            return None;
        }
        if !self.sender.has_postal_code() || !self.recipient.has_postal_code() {
            return None;
        }

        Some(QuoteRequest {
            package: spec,
            delivery_speed: self.delivery_speed,
            sender_postal_code: self.sender.postal_code.clone(),
            recipient_postal_code: self.recipient.postal_code.clone(),
        })
    }
}
