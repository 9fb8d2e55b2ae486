//! # App State Module
//!
//! This module defines the central application state structure and
//! initialization logic for the purchase form app.
//!
//! ## Key Types:
//! - `PurchaseFormApp` - Main application state struct
//!
//! ## Key Functions:
//! - `new()` - Initialize the app, rejecting bad configuration up front
//! - `recalculate()` - Re-derive the reconciliation summary from the rows
//! - `submit_purchase()` - Assemble and hand off the submission payload
//!
//! ## State Management:
//! The PurchaseFormApp struct holds all application state in a single
//! location: the widget configuration, the editable formset rows, the raw
//! header inputs, and the derived summary. The rows and header inputs are
//! the source of truth; the summary is recomputed from them on every frame.

use anyhow::Context;
use log::info;
use shared::{
    reconcile, PurchaseFormConfig, PurchaseOrderSeed, PurchasePayload, ReconciliationSummary,
};

use crate::ui::state::LineFormset;

/// Main application struct for the egui purchase form
pub struct PurchaseFormApp {
    pub config: PurchaseFormConfig,

    // Form state
    pub order_reference: String,
    pub target_quantity_input: String,
    pub formset: LineFormset,

    // Derived state, recomputed every frame
    pub summary: ReconciliationSummary,

    // UI state
    pub error_message: Option<String>,
    pub success_message: Option<String>,
}

impl PurchaseFormApp {
    /// Create a new PurchaseFormApp with default configuration
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Result<Self, anyhow::Error> {
        info!("Initializing purchase form app");

        let config = PurchaseFormConfig::default();
        // Bad configuration means the widget cannot render its template,
        // which is a wiring mistake and not a user condition
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Purchase form misconfigured: {}", e))?;

        // The surrounding application hands the widget the order fragment
        // it is opened on; without one the form starts empty
        let seed = match std::env::args().nth(1) {
            Some(path) => Some(load_order_seed(&path)?),
            None => None,
        };

        let (order_reference, target_quantity_input, formset) = match seed {
            Some(seed) => {
                info!(
                    "Opened on order {} with {} existing lines",
                    seed.reference,
                    seed.lines.len()
                );
                (
                    seed.reference,
                    seed.target_quantity.to_string(),
                    LineFormset::from_lines(&config, &seed.lines),
                )
            }
            None => (String::new(), String::new(), LineFormset::new(&config)),
        };

        let summary = reconcile(&[], 0);

        Ok(Self {
            config,
            order_reference,
            target_quantity_input,
            formset,
            summary,
            error_message: None,
            success_message: None,
        })
    }

    /// Parsed target quantity, zero while the field is empty or half-typed
    pub fn target_quantity(&self) -> u32 {
        self.target_quantity_input.trim().parse().unwrap_or(0)
    }

    /// Re-derive the summary from the current rows and target. Cheap enough
    /// to run unconditionally on every frame.
    pub fn recalculate(&mut self) {
        self.summary = reconcile(&self.formset.snapshot(), self.target_quantity());
    }

    /// Assemble the submission payload and hand it off. Submission is never
    /// blocked on validation; the receiving side re-checks everything.
    pub fn submit_purchase(&mut self) {
        self.clear_messages();
        self.recalculate();

        let payload =
            PurchasePayload::assemble(&self.order_reference, &self.formset.snapshot(), &self.summary);

        match serde_json::to_string_pretty(&payload) {
            Ok(json) => {
                info!("Submitting purchase payload:\n{}", json);
                if self.summary.is_valid {
                    self.success_message = Some(format!(
                        "Purchase submitted: {} units at {} average",
                        self.summary.summed_quantity,
                        self.config.format_money(self.summary.weighted_average_cost)
                    ));
                } else {
                    self.success_message = Some(
                        "Purchase submitted with open issues; totals will be re-checked on save"
                            .to_string(),
                    );
                }
            }
            Err(e) => {
                self.error_message = Some(format!("Could not assemble purchase payload: {}", e));
            }
        }
    }

    /// Clear any error or success messages
    pub fn clear_messages(&mut self) {
        self.error_message = None;
        self.success_message = None;
    }
}

/// Load the order fragment the widget was opened on. A missing or
/// malformed fragment is a wiring problem, so this failure is fatal.
fn load_order_seed(path: &str) -> Result<PurchaseOrderSeed, anyhow::Error> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read order fragment at {}", path))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Order fragment at {} is not a valid purchase order", path))
}
