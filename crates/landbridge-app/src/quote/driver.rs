//! Async driver: waits out the debounce window and resolves quotes

use tokio::time::{sleep_until, Instant};

use super::wizard::{QuoteState, ShipmentWizard};
use landbridge_domain::service::{calculate_shipping_fee, FeeTable};

/// Owns a wizard and the pricing table, and runs due recomputes
#[derive(Debug, Clone)]
pub struct QuoteDriver {
    wizard: ShipmentWizard,
    fee_table: FeeTable,
    recomputes: u64,
}

impl QuoteDriver {
    pub fn new(wizard: ShipmentWizard, fee_table: FeeTable) -> Self {
        Self {
            wizard,
            fee_table,
            recomputes: 0,
        }
    }

    pub fn wizard(&self) -> &ShipmentWizard {
        &self.wizard
    }

    pub fn wizard_mut(&mut self) -> &mut ShipmentWizard {
        &mut self.wizard
    }

    pub fn fee_table(&self) -> &FeeTable {
        &self.fee_table
    }

    /// Number of fee calculations actually run
    pub fn recompute_count(&self) -> u64 {
        self.recomputes
    }

    /// Run the recompute if it is due now, without waiting
    pub fn run_due(&mut self) -> bool {
        match self.wizard.poll(Instant::now()) {
            Some(ticket) => {
                let fee = calculate_shipping_fee(ticket.request(), &self.fee_table);
                self.recomputes += 1;
                self.wizard.complete(ticket, fee)
            }
            None => false,
        }
    }

    /// Wait until no recompute is pending and return the resulting state
    pub async fn settle(&mut self) -> QuoteState {
        while let Some(deadline) = self.wizard.recompute_deadline() {
            sleep_until(deadline).await;
            self.run_due();
        }
        self.wizard.quote()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use landbridge_domain::model::ContactAddress;
    use landbridge_types::DeliverySpeed;
    use std::time::Duration;

    fn postal(code: &str) -> ContactAddress {
        ContactAddress {
            postal_code: code.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_settle_runs_single_recompute() {
        let mut driver = QuoteDriver::new(
            ShipmentWizard::new(Duration::from_millis(500)),
            FeeTable::default(),
        );
        let now = Instant::now();
        let wizard = driver.wizard_mut();
        wizard.set_sender(postal("150-0002"), now);
        wizard.set_recipient(postal("530-0001"), now);
        wizard.set_dimensions(Some(20.0), Some(20.0), Some(20.0), now);
        for weight in [1.0, 2.0, 3.0] {
            wizard.set_weight(Some(weight), Instant::now());
        }
        wizard.set_delivery_speed(DeliverySpeed::Express, Instant::now());

        let state = driver.settle().await;
        assert_eq!(state, QuoteState::Quoted(1450));
        assert_eq!(driver.recompute_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_due_waits_for_window() {
        let mut driver = QuoteDriver::new(
            ShipmentWizard::new(Duration::from_millis(300)),
            FeeTable::default(),
        );
        let now = Instant::now();
        let wizard = driver.wizard_mut();
        wizard.set_sender(postal("150-0002"), now);
        wizard.set_recipient(postal("530-0001"), now);
        wizard.set_dimensions(Some(60.0), Some(60.0), Some(60.0), now);
        wizard.set_weight(Some(26.0), now);

        assert!(!driver.run_due());
        tokio::time::advance(Duration::from_millis(300)).await;
        assert!(driver.run_due());
        assert_eq!(driver.wizard().estimated_fee(), Some(3500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_settle_with_nothing_pending() {
        let mut driver = QuoteDriver::new(
            ShipmentWizard::new(Duration::from_millis(500)),
            FeeTable::default(),
        );
        assert_eq!(driver.settle().await, QuoteState::Unavailable);
        assert_eq!(driver.recompute_count(), 0);
    }
}
