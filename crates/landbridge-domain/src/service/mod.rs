//! Domain services

pub mod delivery;
pub mod fee_calculator;
pub mod order_query;
pub mod validation;

pub use delivery::estimated_delivery;
pub use fee_calculator::{calculate_shipping_fee, quote_breakdown, FeeBreakdown, FeeTable, SizeCategory};
pub use order_query::{dashboard_stats, orders_for_user, DEMO_USER_ID};
