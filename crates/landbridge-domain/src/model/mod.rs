//! Domain model types

pub mod account;
pub mod prefecture;
pub mod quote;
pub mod shipment;

pub use account::{LoginInput, ProfileInput, RegisterInput};
pub use prefecture::{is_prefecture, PREFECTURES};
pub use quote::{PackageSpec, QuoteRequest};
pub use shipment::{ContactAddress, PackageDraft, ShipmentDraft, DEFAULT_COUNTRY};
