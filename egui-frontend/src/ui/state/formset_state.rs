//! # Formset State Module
//!
//! This module contains the line-item collection manager: the editable rows
//! of the purchase form plus the formset management count.
//!
//! ## Responsibilities:
//! - Adding rows from the template defaults
//! - Soft-deleting / restoring rows that came from persisted records
//! - Hard-removing rows that were never saved
//! - Sequential renumbering of visible rows
//! - Snapshotting the raw text inputs into domain lines
//!
//! ## Purpose:
//! The rows hold raw text the way the form fields do; the collection itself
//! is the source of truth between renders. Parsing happens only at snapshot
//! time, leniently (unparseable numbers count as zero), so a half-typed
//! field never breaks recalculation.

use shared::{LineState, PurchaseFormConfig, PurchaseLine};

/// One editable row of the purchase formset
#[derive(Debug, Clone, PartialEq)]
pub struct LineRow {
    /// Display position, rewritten by `renumber()` for visible rows
    pub line_number: u32,
    pub quantity_input: String,
    pub brand: String,
    pub model: String,
    pub unit_cost_input: String,
    /// Rows that came from a saved record are soft-deleted, never removed
    pub persisted: bool,
    pub deleted: bool,
}

impl LineRow {
    /// Build a fresh row from the template defaults
    pub fn from_template(line_number: u32, default_quantity: u32) -> Self {
        Self {
            line_number,
            quantity_input: default_quantity.to_string(),
            brand: String::new(),
            model: String::new(),
            unit_cost_input: String::new(),
            persisted: false,
            deleted: false,
        }
    }

    /// Build a row pre-filled from a persisted line
    pub fn from_persisted(line: &PurchaseLine) -> Self {
        Self {
            line_number: line.line_number,
            quantity_input: line.quantity.to_string(),
            brand: line.brand.clone(),
            model: line.model.clone(),
            unit_cost_input: format!("{:.2}", line.unit_cost),
            persisted: true,
            deleted: line.state == LineState::Deleted,
        }
    }

    /// Parsed quantity, zero when the field does not hold a number
    pub fn quantity(&self) -> u32 {
        self.quantity_input.trim().parse().unwrap_or(0)
    }

    /// Parsed unit cost, zero when the field does not hold a number
    pub fn unit_cost(&self) -> f64 {
        self.unit_cost_input.trim().parse().unwrap_or(0.0)
    }

    /// Spend this row represents at its current field values
    pub fn line_total(&self) -> f64 {
        self.quantity() as f64 * self.unit_cost()
    }

    fn to_line(&self) -> PurchaseLine {
        PurchaseLine {
            line_number: self.line_number,
            quantity: self.quantity(),
            brand: self.brand.clone(),
            model: self.model.clone(),
            unit_cost: self.unit_cost(),
            state: if self.deleted {
                LineState::Deleted
            } else {
                LineState::Active
            },
        }
    }
}

/// The ordered collection of purchase rows plus the management count
#[derive(Debug, Clone, PartialEq)]
pub struct LineFormset {
    pub rows: Vec<LineRow>,
    /// Formset management count: every row the form renders, including
    /// soft-deleted ones. Only hard removal decrements it.
    pub total_forms: usize,
    max_lines: usize,
    default_quantity: u32,
}

impl LineFormset {
    /// Create an empty formset from the widget configuration
    pub fn new(config: &PurchaseFormConfig) -> Self {
        Self {
            rows: Vec::new(),
            total_forms: 0,
            max_lines: config.max_lines,
            default_quantity: config.default_quantity,
        }
    }

    /// Seed the formset from lines that already exist on the order
    pub fn from_lines(config: &PurchaseFormConfig, lines: &[PurchaseLine]) -> Self {
        let mut formset = Self::new(config);
        formset.rows = lines.iter().map(LineRow::from_persisted).collect();
        formset.total_forms = formset.rows.len();
        formset.renumber();
        formset
    }

    /// Append a new row with template defaults. Returns false when the
    /// formset is already at its line limit.
    pub fn add_line(&mut self) -> bool {
        if self.rows.len() >= self.max_lines {
            return false;
        }
        let next_number = self.visible_count() as u32 + 1;
        self.rows
            .push(LineRow::from_template(next_number, self.default_quantity));
        self.total_forms += 1;
        self.renumber();
        true
    }

    /// Flip the deleted flag on a persisted row. A second toggle undoes the
    /// first, which is the whole point of soft deletion.
    pub fn toggle_line(&mut self, index: usize) {
        if let Some(row) = self.rows.get_mut(index) {
            row.deleted = !row.deleted;
        }
        self.renumber();
    }

    /// Hard-remove a row that was never saved
    pub fn remove_line(&mut self, index: usize) {
        if index < self.rows.len() {
            self.rows.remove(index);
            self.total_forms = self.total_forms.saturating_sub(1);
        }
        self.renumber();
    }

    /// Reassign line numbers 1..N over non-deleted rows in display order.
    /// Deleted rows keep the last number they were shown with.
    pub fn renumber(&mut self) {
        let mut next = 1;
        for row in self.rows.iter_mut().filter(|r| !r.deleted) {
            row.line_number = next;
            next += 1;
        }
    }

    /// Rows currently shown as part of the purchase
    pub fn visible_count(&self) -> usize {
        self.rows.iter().filter(|r| !r.deleted).count()
    }

    pub fn is_full(&self) -> bool {
        self.rows.len() >= self.max_lines
    }

    /// Parse the raw rows into domain lines for the calculator
    pub fn snapshot(&self) -> Vec<PurchaseLine> {
        self.rows.iter().map(LineRow::to_line).collect()
    }
}
