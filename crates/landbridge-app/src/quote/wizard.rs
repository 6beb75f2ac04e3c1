//! Three-step shipment request wizard
//!
//! Package info → addresses → review/submit. Holds the draft, drives debounced
//! quote recomputation, and turns the final draft into an `Order`.
//!
//! The wizard never computes a fee itself: `poll` hands out a
//! `RecomputeTicket` once the debounce window has elapsed and the caller
//! returns the result through `complete`. Tickets issued for an input set that
//! has since changed are ignored.

use chrono::{DateTime, Utc};
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::debounce::Debouncer;
use landbridge_domain::model::{ContactAddress, QuoteRequest, ShipmentDraft};
use landbridge_domain::repository::OrderRepository;
use landbridge_domain::service::estimated_delivery;
use landbridge_domain::service::validation::{validate_contact_address, validate_package};
use landbridge_types::{
    DeliverySpeed, Error, Order, OrderItem, OrderStatus, PackageType, Result, User,
    ValidationErrors,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    /// 荷物情報
    PackageInfo = 1,
    /// 住所入力
    Addresses = 2,
    /// 確認・決済
    Review = 3,
}

impl WizardStep {
    pub fn number(&self) -> u8 {
        *self as u8
    }

    pub fn label(&self) -> &'static str {
        match self {
            WizardStep::PackageInfo => "荷物情報",
            WizardStep::Addresses => "住所入力",
            WizardStep::Review => "確認・決済",
        }
    }

    fn next(&self) -> WizardStep {
        match self {
            WizardStep::PackageInfo => WizardStep::Addresses,
            WizardStep::Addresses | WizardStep::Review => WizardStep::Review,
        }
    }
}

/// What the UI shows in the fee panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteState {
    /// Required inputs are missing
    Unavailable,
    /// A recompute is scheduled or in flight. `previous` is display-only.
    Calculating { previous: Option<u32> },
    /// Fee for the current input set
    Quoted(u32),
}

impl QuoteState {
    /// Last known value, authoritative or not
    pub fn last_value(&self) -> Option<u32> {
        match self {
            QuoteState::Unavailable => None,
            QuoteState::Calculating { previous } => *previous,
            QuoteState::Quoted(fee) => Some(*fee),
        }
    }
}

/// Permission to compute one quote for a specific input generation
#[derive(Debug, Clone)]
pub struct RecomputeTicket {
    generation: u64,
    request: QuoteRequest,
}

impl RecomputeTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn request(&self) -> &QuoteRequest {
        &self.request
    }
}

#[derive(Debug, Clone)]
pub struct ShipmentWizard {
    step: WizardStep,
    draft: ShipmentDraft,
    quote: QuoteState,
    debouncer: Debouncer,
    submitting: bool,
    last_error: Option<String>,
}

impl ShipmentWizard {
    pub fn new(debounce: Duration) -> Self {
        Self {
            step: WizardStep::PackageInfo,
            draft: ShipmentDraft::default(),
            quote: QuoteState::Unavailable,
            debouncer: Debouncer::new(debounce),
            submitting: false,
            last_error: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &ShipmentDraft {
        &self.draft
    }

    pub fn quote(&self) -> QuoteState {
        self.quote
    }

    /// Fee usable for submission
    pub fn estimated_fee(&self) -> Option<u32> {
        match self.quote {
            QuoteState::Quoted(fee) => Some(fee),
            _ => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Message from the last failed submission
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// When the pending recompute becomes due
    pub fn recompute_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    // ==========================================
    // Inputs
    // ==========================================

    pub fn set_package_type(&mut self, package_type: PackageType) {
        if self.inputs_locked() {
            return;
        }
        self.draft.package.package_type = package_type;
    }

    pub fn set_fragile(&mut self, fragile: bool) {
        if self.inputs_locked() {
            return;
        }
        self.draft.package.fragile = fragile;
    }

    pub fn set_weight(&mut self, weight_kg: Option<f64>, now: Instant) {
        if self.inputs_locked() {
            return;
        }
        if self.draft.package.weight_kg != weight_kg {
            self.draft.package.weight_kg = weight_kg;
            self.inputs_changed(now);
        }
    }

    pub fn set_dimensions(
        &mut self,
        length: Option<f64>,
        width: Option<f64>,
        height: Option<f64>,
        now: Instant,
    ) {
        if self.inputs_locked() {
            return;
        }
        let package = &mut self.draft.package;
        if (package.length, package.width, package.height) != (length, width, height) {
            package.length = length;
            package.width = width;
            package.height = height;
            self.inputs_changed(now);
        }
    }

    pub fn set_delivery_speed(&mut self, speed: DeliverySpeed, now: Instant) {
        if self.inputs_locked() {
            return;
        }
        if self.draft.delivery_speed != speed {
            self.draft.delivery_speed = speed;
            self.inputs_changed(now);
        }
    }

    pub fn set_insurance(&mut self, insurance: bool, now: Instant) {
        if self.inputs_locked() {
            return;
        }
        if self.draft.package.insurance != insurance {
            self.draft.package.insurance = insurance;
            self.inputs_changed(now);
        }
    }

    /// Replace the sender sub-form. Only a postal code change triggers a recompute.
    pub fn set_sender(&mut self, sender: ContactAddress, now: Instant) {
        if self.inputs_locked() {
            return;
        }
        let postal_changed = self.draft.sender.postal_code != sender.postal_code;
        self.draft.sender = sender;
        if postal_changed {
            self.inputs_changed(now);
        }
    }

    /// Replace the recipient sub-form. Only a postal code change triggers a recompute.
    pub fn set_recipient(&mut self, recipient: ContactAddress, now: Instant) {
        if self.inputs_locked() {
            return;
        }
        let postal_changed = self.draft.recipient.postal_code != recipient.postal_code;
        self.draft.recipient = recipient;
        if postal_changed {
            self.inputs_changed(now);
        }
    }

    /// Edits are ignored while a submission is open
    fn inputs_locked(&self) -> bool {
        if self.submitting {
            debug!("input ignored during submission");
        }
        self.submitting
    }

    /// Request for the current draft, if it is complete and the package passes validation
    fn valid_quote_request(&self) -> Option<QuoteRequest> {
        if !validate_package(&self.draft.package).is_empty() {
            return None;
        }
        self.draft.quote_request()
    }

    fn inputs_changed(&mut self, now: Instant) {
        if self.valid_quote_request().is_some() {
            let generation = self.debouncer.schedule(now);
            self.quote = QuoteState::Calculating {
                previous: self.quote.last_value(),
            };
            debug!(generation, "quote recompute scheduled");
        } else {
            self.debouncer.cancel();
            self.quote = QuoteState::Unavailable;
            debug!("quote inputs incomplete or out of range");
        }
    }

    // ==========================================
    // Recompute
    // ==========================================

    /// Hand out the due recompute, if the debounce window has elapsed
    pub fn poll(&mut self, now: Instant) -> Option<RecomputeTicket> {
        let generation = self.debouncer.take_due(now)?;
        let request = self.valid_quote_request()?;
        debug!(generation, "quote recompute started");
        Some(RecomputeTicket {
            generation,
            request,
        })
    }

    /// Apply a computed fee. Returns `false` if the ticket was superseded.
    pub fn complete(&mut self, ticket: RecomputeTicket, fee: u32) -> bool {
        if !self.debouncer.is_current(ticket.generation) {
            debug!(
                generation = ticket.generation,
                current = self.debouncer.generation(),
                "discarding stale quote"
            );
            return false;
        }
        self.quote = QuoteState::Quoted(fee);
        debug!(generation = ticket.generation, fee, "quote updated");
        true
    }

    // ==========================================
    // Navigation
    // ==========================================

    fn validate_step(&self, step: WizardStep) -> ValidationErrors {
        match step {
            WizardStep::PackageInfo => validate_package(&self.draft.package),
            WizardStep::Addresses => {
                let mut errors = validate_contact_address("sender", &self.draft.sender);
                errors.extend(validate_contact_address("recipient", &self.draft.recipient));
                errors
            }
            WizardStep::Review => ValidationErrors::new(),
        }
    }

    /// Advance after validating the current step's fields
    pub fn next_step(&mut self) -> Result<WizardStep> {
        self.validate_step(self.step).into_result()?;
        self.step = self.step.next();
        Ok(self.step)
    }

    /// Move back to `step`. Moving forward this way is refused.
    pub fn go_back(&mut self, step: WizardStep) -> bool {
        if step <= self.step {
            self.step = step;
            true
        } else {
            false
        }
    }

    // ==========================================
    // Submission
    // ==========================================

    /// Validate, mark as submitting, and build the order.
    ///
    /// Nothing is created when no current quote exists or the wizard is not
    /// on the review step. Follow with `finish_submission` once persistence
    /// has finished.
    pub fn begin_submission(&mut self, user: &User, now: DateTime<Utc>) -> Result<Order> {
        if self.submitting {
            return Err(Error::SubmissionInProgress);
        }
        let fee = self.estimated_fee().ok_or(Error::QuoteUnavailable)?;
        if self.step != WizardStep::Review {
            return Err(Error::NotAtReview);
        }

        let mut errors = self.validate_step(WizardStep::PackageInfo);
        errors.extend(self.validate_step(WizardStep::Addresses));
        errors.into_result()?;

        let spec = self.draft.package.spec().ok_or(Error::QuoteUnavailable)?;
        self.submitting = true;
        self.last_error = None;

        let item = OrderItem {
            id: format!("item_{}", Uuid::new_v4().simple()),
            name: self.draft.package.package_type.item_name().to_string(),
            quantity: 1,
            weight: spec.weight_kg,
            dimensions: spec.dimensions,
            price: fee,
        };

        Ok(Order {
            id: format!("order_{}", Uuid::new_v4().simple()),
            user_id: user.id.clone(),
            tracking_number: format!("LB{}", now.timestamp_millis()),
            status: OrderStatus::Pending,
            origin: self.draft.sender.to_address(),
            destination: self.draft.recipient.to_address(),
            items: vec![item],
            total_price: fee,
            created_at: now,
            estimated_delivery: estimated_delivery(self.draft.delivery_speed, now),
            actual_delivery: None,
        })
    }

    /// Close out a submission. Success resets the wizard to step 1;
    /// failure keeps everything the user entered.
    pub fn finish_submission(&mut self, outcome: &Result<()>) {
        self.submitting = false;
        match outcome {
            Ok(()) => self.reset(),
            Err(e) => {
                warn!(error = %e, "shipment submission failed");
                self.last_error = Some(format!(
                    "配送依頼に失敗しました。もう一度お試しください。({})",
                    e
                ));
            }
        }
    }

    /// Build the order, persist it through `orders`, and finish.
    pub fn submit(
        &mut self,
        user: &User,
        orders: &dyn OrderRepository,
        now: DateTime<Utc>,
    ) -> Result<Order> {
        let order = self.begin_submission(user, now)?;
        let outcome = orders.append(order.clone());
        self.finish_submission(&outcome);
        outcome?;
        info!(order_id = %order.id, tracking = %order.tracking_number, total = order.total_price, "shipment submitted");
        Ok(order)
    }

    fn reset(&mut self) {
        self.step = WizardStep::PackageInfo;
        self.draft = ShipmentDraft::default();
        self.quote = QuoteState::Unavailable;
        self.debouncer.cancel();
        self.last_error = None;
    }
}
