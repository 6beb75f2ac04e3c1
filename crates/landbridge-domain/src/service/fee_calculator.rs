//! Shipping fee calculation
//!
//! Price = base fee of the size category (sum of three sides)
//!       + weight surcharge + speed surcharge + insurance.
//!
//! Table modelled on Japan Post ゆうパック pricing. Postal codes are carried
//! on the request but do not affect the price; there is no distance tier.

use serde::{Deserialize, Serialize};

use crate::model::QuoteRequest;
use landbridge_types::DeliverySpeed;

/// Upper bounds (inclusive) of the size categories, in cm
pub const SIZE_THRESHOLDS_CM: [u32; 7] = [60, 80, 100, 120, 140, 160, 170];

/// Base fee per size category, aligned with `SIZE_THRESHOLDS_CM`
pub const BASE_FEES_JPY: [u32; 7] = [1100, 1330, 1560, 1800, 2060, 2270, 2640];

/// Base fee when the sum of sides exceeds the largest category
pub const OVERFLOW_BASE_FEE_JPY: u32 = 3000;

/// (strictly above kg, surcharge) in ascending weight order
pub const WEIGHT_SURCHARGE_TIERS: [(f64, u32); 4] =
    [(10.0, 100), (15.0, 200), (20.0, 300), (25.0, 500)];

pub const EXPRESS_SURCHARGE_JPY: u32 = 350;
pub const TIME_SPECIFIED_SURCHARGE_JPY: u32 = 220;
pub const INSURANCE_FEE_JPY: u32 = 380;

/// One size category: packages whose sum of sides is `<= max_total_cm`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeBand {
    pub max_total_cm: u32,
    pub base_fee: u32,
}

/// Weight tier: packages strictly heavier than `over_kg` add `surcharge`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightTier {
    pub over_kg: f64,
    pub surcharge: u32,
}

/// Size category a package falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SizeCategory {
    /// Named after its upper bound, e.g. `Sized(60)` is "60サイズ"
    Sized(u32),
    /// Larger than every configured band
    Overflow,
}

impl SizeCategory {
    pub fn label(&self) -> String {
        match self {
            SizeCategory::Sized(cm) => format!("{}サイズ", cm),
            SizeCategory::Overflow => "規格外".to_string(),
        }
    }
}

/// Adjustable pricing table. `Default` uses the published constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeTable {
    /// Ascending by `max_total_cm`
    pub size_bands: Vec<SizeBand>,
    pub overflow_base_fee: u32,
    /// Ascending by `over_kg`
    pub weight_tiers: Vec<WeightTier>,
    pub express_surcharge: u32,
    pub time_specified_surcharge: u32,
    pub insurance_fee: u32,
}

impl Default for FeeTable {
    fn default() -> Self {
        Self {
            size_bands: SIZE_THRESHOLDS_CM
                .iter()
                .zip(BASE_FEES_JPY.iter())
                .map(|(&max_total_cm, &base_fee)| SizeBand {
                    max_total_cm,
                    base_fee,
                })
                .collect(),
            overflow_base_fee: OVERFLOW_BASE_FEE_JPY,
            weight_tiers: WEIGHT_SURCHARGE_TIERS
                .iter()
                .map(|&(over_kg, surcharge)| WeightTier { over_kg, surcharge })
                .collect(),
            express_surcharge: EXPRESS_SURCHARGE_JPY,
            time_specified_surcharge: TIME_SPECIFIED_SURCHARGE_JPY,
            insurance_fee: INSURANCE_FEE_JPY,
        }
    }
}

impl FeeTable {
    /// Smallest band whose upper bound fits `total_size_cm`
    pub fn size_category(&self, total_size_cm: f64) -> SizeCategory {
        self.size_bands
            .iter()
            .find(|band| total_size_cm <= band.max_total_cm as f64)
            .map(|band| SizeCategory::Sized(band.max_total_cm))
            .unwrap_or(SizeCategory::Overflow)
    }

    pub fn base_fee(&self, category: SizeCategory) -> u32 {
        match category {
            SizeCategory::Sized(cm) => self
                .size_bands
                .iter()
                .find(|band| band.max_total_cm == cm)
                .map(|band| band.base_fee)
                .unwrap_or(self.overflow_base_fee),
            SizeCategory::Overflow => self.overflow_base_fee,
        }
    }

    pub fn weight_surcharge(&self, weight_kg: f64) -> u32 {
        self.weight_tiers
            .iter()
            .rev()
            .find(|tier| weight_kg > tier.over_kg)
            .map(|tier| tier.surcharge)
            .unwrap_or(0)
    }

    pub fn speed_surcharge(&self, speed: DeliverySpeed) -> u32 {
        match speed {
            DeliverySpeed::Normal => 0,
            DeliverySpeed::Express => self.express_surcharge,
            DeliverySpeed::TimeSpecified => self.time_specified_surcharge,
        }
    }

    pub fn insurance_fee(&self, insured: bool) -> u32 {
        if insured {
            self.insurance_fee
        } else {
            0
        }
    }
}

/// Itemised quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeBreakdown {
    pub size_category: SizeCategory,
    pub base_fee: u32,
    pub weight_surcharge: u32,
    pub speed_surcharge: u32,
    pub insurance_fee: u32,
    pub total: u32,
}

pub fn quote_breakdown(request: &QuoteRequest, table: &FeeTable) -> FeeBreakdown {
    let package = &request.package;
    let size_category = table.size_category(package.dimensions.total_size());
    let base_fee = table.base_fee(size_category);
    let weight_surcharge = table.weight_surcharge(package.weight_kg);
    let speed_surcharge = table.speed_surcharge(request.delivery_speed);
    let insurance_fee = table.insurance_fee(package.insurance);

    FeeBreakdown {
        size_category,
        base_fee,
        weight_surcharge,
        speed_surcharge,
        insurance_fee,
        total: base_fee + weight_surcharge + speed_surcharge + insurance_fee,
    }
}

/// Total shipping fee in JPY
pub fn calculate_shipping_fee(request: &QuoteRequest, table: &FeeTable) -> u32 {
    quote_breakdown(request, table).total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PackageSpec;
    use landbridge_types::Dimensions;

    fn request(
        dims: (f64, f64, f64),
        weight_kg: f64,
        speed: DeliverySpeed,
        insurance: bool,
    ) -> QuoteRequest {
        QuoteRequest {
            package: PackageSpec {
                weight_kg,
                dimensions: Dimensions::new(dims.0, dims.1, dims.2),
                fragile: false,
                insurance,
            },
            delivery_speed: speed,
            sender_postal_code: "150-0002".to_string(),
            recipient_postal_code: "530-0001".to_string(),
        }
    }

    fn fee(dims: (f64, f64, f64), weight: f64, speed: DeliverySpeed, insurance: bool) -> u32 {
        calculate_shipping_fee(&request(dims, weight, speed, insurance), &FeeTable::default())
    }

    // ==========================================
    // Published examples
    // ==========================================

    #[test]
    fn test_sixty_size_normal() {
        assert_eq!(fee((20.0, 20.0, 20.0), 1.0, DeliverySpeed::Normal, false), 1100);
    }

    #[test]
    fn test_sixty_size_express_insured() {
        // 1100 + 350 + 380
        assert_eq!(fee((20.0, 20.0, 20.0), 1.0, DeliverySpeed::Express, true), 1830);
    }

    #[test]
    fn test_time_specified_surcharge() {
        assert_eq!(
            fee((20.0, 20.0, 20.0), 1.0, DeliverySpeed::TimeSpecified, false),
            1320
        );
    }

    #[test]
    fn test_overflow_above_largest_band() {
        let table = FeeTable::default();
        let req = request((60.0, 60.0, 60.0), 1.0, DeliverySpeed::Normal, false);
        let breakdown = quote_breakdown(&req, &table);
        assert_eq!(breakdown.size_category, SizeCategory::Overflow);
        assert!(breakdown.base_fee > 2640);
        assert_eq!(breakdown.total, OVERFLOW_BASE_FEE_JPY);
    }

    // ==========================================
    // Size category boundaries
    // ==========================================

    #[test]
    fn test_boundary_is_inclusive() {
        let table = FeeTable::default();
        assert_eq!(table.size_category(60.0), SizeCategory::Sized(60));
        assert_eq!(table.size_category(61.0), SizeCategory::Sized(80));
        assert_eq!(table.size_category(60.5), SizeCategory::Sized(80));
        assert_eq!(table.size_category(170.0), SizeCategory::Sized(170));
        assert_eq!(table.size_category(170.1), SizeCategory::Overflow);
    }

    #[test]
    fn test_every_band_maps_to_its_fee() {
        let table = FeeTable::default();
        for (cm, expected) in SIZE_THRESHOLDS_CM.iter().zip(BASE_FEES_JPY.iter()) {
            let category = table.size_category(*cm as f64);
            assert_eq!(category, SizeCategory::Sized(*cm));
            assert_eq!(table.base_fee(category), *expected);
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(SizeCategory::Sized(60).label(), "60サイズ");
        assert_eq!(SizeCategory::Overflow.label(), "規格外");
    }

    // ==========================================
    // Weight surcharge tiers
    // ==========================================

    #[test]
    fn test_weight_tiers() {
        let table = FeeTable::default();
        assert_eq!(table.weight_surcharge(0.5), 0);
        assert_eq!(table.weight_surcharge(10.0), 0);
        assert_eq!(table.weight_surcharge(10.1), 100);
        assert_eq!(table.weight_surcharge(15.0), 100);
        assert_eq!(table.weight_surcharge(15.5), 200);
        assert_eq!(table.weight_surcharge(20.5), 300);
        assert_eq!(table.weight_surcharge(25.0), 300);
        assert_eq!(table.weight_surcharge(25.1), 500);
        assert_eq!(table.weight_surcharge(30.0), 500);
    }

    #[test]
    fn test_heavier_never_cheaper() {
        let table = FeeTable::default();
        let mut previous = 0;
        let mut weight = 0.1;
        while weight <= 30.0 {
            let surcharge = table.weight_surcharge(weight);
            assert!(surcharge >= previous, "weight {} got {}", weight, surcharge);
            previous = surcharge;
            weight += 0.1;
        }
    }

    // ==========================================
    // Properties
    // ==========================================

    #[test]
    fn test_fee_at_least_base_fee() {
        let table = FeeTable::default();
        let speeds = [
            DeliverySpeed::Normal,
            DeliverySpeed::Express,
            DeliverySpeed::TimeSpecified,
        ];
        for side in [5.0, 20.0, 33.0, 40.0, 50.0, 56.0] {
            for weight in [0.1, 10.5, 18.0, 29.9] {
                for speed in speeds {
                    for insurance in [false, true] {
                        let req = request((side, side, side), weight, speed, insurance);
                        let base = table.base_fee(table.size_category(side * 3.0));
                        assert!(calculate_shipping_fee(&req, &table) >= base);
                    }
                }
            }
        }
    }

    #[test]
    fn test_insurance_adds_exactly_flat_fee() {
        for side in [10.0, 30.0, 45.0, 60.0] {
            let plain = fee((side, side, side), 12.0, DeliverySpeed::Express, false);
            let insured = fee((side, side, side), 12.0, DeliverySpeed::Express, true);
            assert_eq!(insured - plain, INSURANCE_FEE_JPY);
        }
    }

    #[test]
    fn test_pure_and_deterministic() {
        let req = request((30.0, 25.0, 20.0), 16.0, DeliverySpeed::TimeSpecified, true);
        let table = FeeTable::default();
        assert_eq!(
            calculate_shipping_fee(&req, &table),
            calculate_shipping_fee(&req, &table)
        );
    }

    /// Grow one side from 1 to 170 cm with the other two held at `others`
    fn assert_monotonic_along(axis: usize, others: f64) {
        let table = FeeTable::default();
        let mut previous = 0;
        for side in 1..=170 {
            let mut dims = [others, others, others];
            dims[axis] = side as f64;
            let req = request((dims[0], dims[1], dims[2]), 5.0, DeliverySpeed::Normal, false);
            let current = calculate_shipping_fee(&req, &table);
            assert!(
                current >= previous,
                "axis {} at {} cm (others {}) dropped from {} to {}",
                axis,
                side,
                others,
                previous,
                current
            );
            previous = current;
        }
    }

    #[test]
    fn test_growing_any_side_never_decreases_fee() {
        for axis in 0..3 {
            for others in [1.0, 20.0, 45.0, 80.0] {
                assert_monotonic_along(axis, others);
            }
        }
    }

    #[test]
    fn test_crossing_into_overflow_never_decreases_fee() {
        let table = FeeTable::default();
        for axis in 0..3 {
            let mut previous = 0;
            // totals run from 101 to 270, through the 170 band into overflow
            for side in 1..=170 {
                let mut dims = [50.0, 50.0, 50.0];
                dims[axis] = side as f64;
                let req = request((dims[0], dims[1], dims[2]), 5.0, DeliverySpeed::Normal, false);
                let current = calculate_shipping_fee(&req, &table);
                assert!(current >= previous, "axis {} at {} cm", axis, side);
                previous = current;
            }
            assert_eq!(previous, OVERFLOW_BASE_FEE_JPY);
        }

        let at_limit = fee((70.0, 50.0, 50.0), 5.0, DeliverySpeed::Normal, false);
        let over = fee((70.1, 50.0, 50.0), 5.0, DeliverySpeed::Normal, false);
        assert_eq!(at_limit, 2640);
        assert_eq!(over, OVERFLOW_BASE_FEE_JPY);
        assert!(over > at_limit);
    }

    #[test]
    fn test_postal_codes_do_not_affect_price() {
        let table = FeeTable::default();
        let mut req = request((20.0, 20.0, 20.0), 1.0, DeliverySpeed::Normal, false);
        let before = calculate_shipping_fee(&req, &table);
        req.recipient_postal_code = "900-0001".to_string();
        assert_eq!(calculate_shipping_fee(&req, &table), before);
    }

    #[test]
    fn test_custom_table() {
        let table = FeeTable {
            insurance_fee: 500,
            express_surcharge: 400,
            ..FeeTable::default()
        };
        let req = request((20.0, 20.0, 20.0), 1.0, DeliverySpeed::Express, true);
        assert_eq!(calculate_shipping_fee(&req, &table), 2000);
    }
}
