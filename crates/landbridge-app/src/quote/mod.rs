//! Shipment quote orchestration

pub mod debounce;
pub mod driver;
pub mod wizard;

pub use debounce::Debouncer;
pub use driver::QuoteDriver;
pub use wizard::{QuoteState, RecomputeTicket, ShipmentWizard, WizardStep};
