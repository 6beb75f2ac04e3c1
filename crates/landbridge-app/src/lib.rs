//! Application service layer - config, session, shipment wizard, order queries

pub mod config;
pub mod orders;
pub mod quote;
pub mod repository;
pub mod session;

pub use config::Config;
pub use orders::OrderQueryService;
pub use quote::{QuoteDriver, QuoteState, ShipmentWizard, WizardStep};
pub use repository::{open_repositories, open_repositories_at, Repositories};
pub use session::{AuthService, Session};
