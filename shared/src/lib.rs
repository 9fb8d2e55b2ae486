use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a purchase line.
///
/// Lines that came from a persisted record are never removed from the
/// collection; marking them `Deleted` excludes them from every aggregate
/// while keeping their field values around so a second toggle restores them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineState {
    Active,
    Deleted,
}

/// One row of the purchase form: a batch of identical units with a
/// brand/model and a per-unit cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseLine {
    /// Display position, 1-based. Recomputed over non-deleted lines after
    /// every mutation; deleted lines keep the last number they were shown
    /// with.
    pub line_number: u32,
    pub quantity: u32,
    pub brand: String,
    pub model: String,
    /// Cost per unit (money is f64 throughout, formatted to 2 decimals)
    pub unit_cost: f64,
    pub state: LineState,
}

impl PurchaseLine {
    /// Build a fresh line from the form template defaults
    pub fn from_template(line_number: u32, default_quantity: u32) -> Self {
        Self {
            line_number,
            quantity: default_quantity,
            brand: String::new(),
            model: String::new(),
            unit_cost: 0.0,
            state: LineState::Active,
        }
    }

    pub fn is_deleted(&self) -> bool {
        self.state == LineState::Deleted
    }

    /// A line is "valid" when it actually describes a priced batch:
    /// positive quantity and positive unit cost. Only valid lines
    /// contribute to the cost-weighted sums.
    pub fn is_valid(&self) -> bool {
        self.state == LineState::Active && self.quantity > 0 && self.unit_cost > 0.0
    }

    /// Total spend this line represents
    pub fn line_total(&self) -> f64 {
        self.quantity as f64 * self.unit_cost
    }
}

/// Validation failures produced by the reconciliation calculator.
///
/// These are user-facing, non-fatal messages; the order they are produced
/// in is the order they are shown in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ReconciliationError {
    /// A line with units on it has no brand
    MissingBrand(u32),
    /// A line with units on it has no (or zero) unit cost
    MissingCost(u32),
    /// Summed quantities fall short of the target by this many units
    QuantityShort(u32),
    /// Summed quantities exceed the target by this many units
    QuantityOver(u32),
    /// No line has both a positive quantity and a positive cost
    NoValidLines,
}

impl fmt::Display for ReconciliationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReconciliationError::MissingBrand(line) => {
                write!(f, "Line {}: brand is required", line)
            }
            ReconciliationError::MissingCost(line) => {
                write!(f, "Line {}: unit cost is required", line)
            }
            ReconciliationError::QuantityShort(units) => {
                write!(f, "Quantities are short by {} units", units)
            }
            ReconciliationError::QuantityOver(units) => {
                write!(f, "Quantities are over by {} units", units)
            }
            ReconciliationError::NoValidLines => {
                write!(f, "Add at least one line with a quantity and a unit cost")
            }
        }
    }
}

impl std::error::Error for ReconciliationError {}

/// Derived view of the whole form, recomputed on every mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconciliationSummary {
    /// The quantity the order says was purchased
    pub total_quantity_target: u32,
    /// Sum of quantities over non-deleted lines
    pub summed_quantity: u32,
    /// Total spend over valid lines divided by the summed quantity
    /// (0.0 when nothing is counted yet)
    pub weighted_average_cost: f64,
    /// `total_quantity_target` priced at the weighted average
    pub total_cost: f64,
    pub is_valid: bool,
    pub errors: Vec<ReconciliationError>,
}

impl ReconciliationSummary {
    /// Rendered error strings, in display order
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.to_string()).collect()
    }
}

/// Reconcile the current lines against the target total quantity.
///
/// Deleted lines are ignored entirely, whatever their field values. The
/// summary is valid only when no errors were produced, the summed quantity
/// matches the target, and at least one valid line exists.
pub fn reconcile(lines: &[PurchaseLine], total_quantity_target: u32) -> ReconciliationSummary {
    let counted: Vec<&PurchaseLine> = lines.iter().filter(|l| !l.is_deleted()).collect();

    let summed_quantity: u32 = counted.iter().map(|l| l.quantity).sum();
    let valid_line_count = counted.iter().filter(|l| l.is_valid()).count();

    let weighted_spend: f64 = counted
        .iter()
        .filter(|l| l.is_valid())
        .map(|l| l.line_total())
        .sum();
    let weighted_average_cost = if summed_quantity == 0 {
        0.0
    } else {
        weighted_spend / summed_quantity as f64
    };
    let total_cost = total_quantity_target as f64 * weighted_average_cost;

    let mut errors = Vec::new();

    // Per-line checks only apply to lines that claim units
    for line in counted.iter().filter(|l| l.quantity > 0) {
        if line.brand.trim().is_empty() {
            errors.push(ReconciliationError::MissingBrand(line.line_number));
        }
    }
    for line in counted.iter().filter(|l| l.quantity > 0) {
        if line.unit_cost <= 0.0 {
            errors.push(ReconciliationError::MissingCost(line.line_number));
        }
    }

    // Mismatch is only meaningful once something has been entered
    if summed_quantity > 0 && summed_quantity != total_quantity_target {
        if summed_quantity < total_quantity_target {
            errors.push(ReconciliationError::QuantityShort(
                total_quantity_target - summed_quantity,
            ));
        } else {
            errors.push(ReconciliationError::QuantityOver(
                summed_quantity - total_quantity_target,
            ));
        }
    }

    if valid_line_count == 0 {
        errors.push(ReconciliationError::NoValidLines);
    }

    let is_valid =
        errors.is_empty() && summed_quantity == total_quantity_target && valid_line_count > 0;

    ReconciliationSummary {
        total_quantity_target,
        summed_quantity,
        weighted_average_cost,
        total_cost,
        is_valid,
        errors,
    }
}

/// Badge shown next to the form totals. The four states are mutually
/// exclusive and derived purely from the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BadgeState {
    /// Everything checks out
    Reconciled,
    /// Nothing entered yet
    Empty,
    /// Only problem is that the quantities disagree with the target
    QuantityMismatch,
    /// Line-level errors need fixing first
    Invalid,
}

impl BadgeState {
    pub fn for_summary(summary: &ReconciliationSummary) -> Self {
        if summary.is_valid {
            return BadgeState::Reconciled;
        }
        if summary.summed_quantity == 0 {
            return BadgeState::Empty;
        }
        let only_mismatch = summary.errors.iter().all(|e| {
            matches!(
                e,
                ReconciliationError::QuantityShort(_) | ReconciliationError::QuantityOver(_)
            )
        });
        if only_mismatch {
            BadgeState::QuantityMismatch
        } else {
            BadgeState::Invalid
        }
    }
}

/// Configuration for the purchase form widget
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PurchaseFormConfig {
    pub currency_symbol: String,
    /// Hard ceiling on how many lines the form will add
    pub max_lines: usize,
    pub max_brand_length: usize,
    pub max_model_length: usize,
    /// Quantity a freshly added line starts with
    pub default_quantity: u32,
}

impl Default for PurchaseFormConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            max_lines: 50,
            max_brand_length: 64,
            max_model_length: 64,
            default_quantity: 1,
        }
    }
}

impl PurchaseFormConfig {
    /// Reject configurations the form cannot be built from. A failure here
    /// means the widget was wired up wrong, so construction aborts with it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.currency_symbol.trim().is_empty() {
            return Err(ConfigError::EmptyCurrencySymbol);
        }
        if self.max_lines == 0 {
            return Err(ConfigError::ZeroMaxLines);
        }
        Ok(())
    }

    /// Format an amount in the configured currency, e.g. "$5.80"
    pub fn format_money(&self, amount: f64) -> String {
        format!("{}{:.2}", self.currency_symbol, amount)
    }
}

/// Fatal configuration problems detected at construction time
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    EmptyCurrencySymbol,
    ZeroMaxLines,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyCurrencySymbol => {
                write!(f, "Currency symbol must not be empty")
            }
            ConfigError::ZeroMaxLines => {
                write!(f, "Maximum line count must be at least 1")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// A purchase order fragment the widget is opened on: the order reference,
/// the declared unit count, and any lines already saved against it. This is
/// what the surrounding application renders the form from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrderSeed {
    pub reference: String,
    pub target_quantity: u32,
    #[serde(default)]
    pub lines: Vec<PurchaseLine>,
}

/// What submission hands off: the surviving lines plus the reconciled
/// totals, stamped with a submission time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchasePayload {
    /// Service-order reference this purchase belongs to
    pub reference: String,
    pub target_quantity: u32,
    /// Non-deleted lines, in display order with their final numbers
    pub lines: Vec<PurchaseLine>,
    pub summed_quantity: u32,
    pub weighted_average_cost: f64,
    pub total_cost: f64,
    pub is_valid: bool,
    /// RFC 3339 timestamp
    pub submitted_at: String,
}

impl PurchasePayload {
    pub fn assemble(
        reference: &str,
        lines: &[PurchaseLine],
        summary: &ReconciliationSummary,
    ) -> Self {
        Self {
            reference: reference.to_string(),
            target_quantity: summary.total_quantity_target,
            lines: lines.iter().filter(|l| !l.is_deleted()).cloned().collect(),
            summed_quantity: summary.summed_quantity,
            weighted_average_cost: summary.weighted_average_cost,
            total_cost: summary.total_cost,
            is_valid: summary.is_valid,
            submitted_at: chrono::Local::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(number: u32, quantity: u32, brand: &str, unit_cost: f64) -> PurchaseLine {
        PurchaseLine {
            line_number: number,
            quantity,
            brand: brand.to_string(),
            model: String::new(),
            unit_cost,
            state: LineState::Active,
        }
    }

    #[test]
    fn test_reconcile_matching_target() {
        let lines = vec![line(1, 6, "A", 5.0), line(2, 4, "B", 7.0)];
        let summary = reconcile(&lines, 10);

        assert_eq!(summary.summed_quantity, 10);
        assert!((summary.weighted_average_cost - 5.8).abs() < 1e-9);
        assert!((summary.total_cost - 58.0).abs() < 1e-9);
        assert!(summary.is_valid);
        assert!(summary.errors.is_empty());
    }

    #[test]
    fn test_reconcile_short_of_target() {
        let lines = vec![line(1, 6, "A", 5.0)];
        let summary = reconcile(&lines, 10);

        assert_eq!(summary.summed_quantity, 6);
        assert!(!summary.is_valid);
        assert_eq!(summary.errors, vec![ReconciliationError::QuantityShort(4)]);
        assert_eq!(
            summary.error_messages(),
            vec!["Quantities are short by 4 units".to_string()]
        );
    }

    #[test]
    fn test_reconcile_over_target() {
        let lines = vec![line(1, 8, "A", 5.0), line(2, 5, "B", 7.0)];
        let summary = reconcile(&lines, 10);

        assert!(!summary.is_valid);
        assert_eq!(summary.errors, vec![ReconciliationError::QuantityOver(3)]);
    }

    #[test]
    fn test_missing_brand_reported_with_line_number() {
        let lines = vec![line(1, 3, "", 4.0), line(2, 7, "B", 4.0)];
        let summary = reconcile(&lines, 10);

        // Quantities match the target, but the brand error still fails it
        assert_eq!(summary.summed_quantity, 10);
        assert!(!summary.is_valid);
        assert_eq!(summary.errors, vec![ReconciliationError::MissingBrand(1)]);
    }

    #[test]
    fn test_missing_cost_reported_after_brand_errors() {
        let lines = vec![line(1, 4, "", 0.0), line(2, 6, "B", 3.0)];
        let summary = reconcile(&lines, 10);

        assert_eq!(
            summary.errors,
            vec![
                ReconciliationError::MissingBrand(1),
                ReconciliationError::MissingCost(1),
            ]
        );
        assert!(!summary.is_valid);
    }

    #[test]
    fn test_deleted_lines_excluded_from_all_aggregates() {
        let mut deleted = line(2, 100, "Junk", 99.0);
        deleted.state = LineState::Deleted;
        let lines = vec![line(1, 10, "A", 2.5), deleted];
        let summary = reconcile(&lines, 10);

        assert_eq!(summary.summed_quantity, 10);
        assert!((summary.weighted_average_cost - 2.5).abs() < 1e-9);
        assert!(summary.is_valid);
    }

    #[test]
    fn test_empty_form_has_no_mismatch_error() {
        let summary = reconcile(&[], 10);

        assert_eq!(summary.summed_quantity, 0);
        assert_eq!(summary.weighted_average_cost, 0.0);
        assert_eq!(summary.errors, vec![ReconciliationError::NoValidLines]);
        assert!(!summary.is_valid);
    }

    #[test]
    fn test_zero_summed_quantity_avoids_division() {
        // A line with zero quantity keeps the sum at zero
        let lines = vec![line(1, 0, "A", 5.0)];
        let summary = reconcile(&lines, 10);

        assert_eq!(summary.summed_quantity, 0);
        assert_eq!(summary.weighted_average_cost, 0.0);
        assert_eq!(summary.total_cost, 0.0);
    }

    #[test]
    fn test_unpriced_line_counts_toward_sum_but_not_average() {
        let lines = vec![line(1, 4, "A", 5.0), line(2, 6, "B", 0.0)];
        let summary = reconcile(&lines, 10);

        assert_eq!(summary.summed_quantity, 10);
        // Only the priced line contributes to the spend; the divisor is
        // still the full summed quantity
        assert!((summary.weighted_average_cost - 2.0).abs() < 1e-9);
        assert_eq!(summary.errors, vec![ReconciliationError::MissingCost(2)]);
        assert!(!summary.is_valid);
    }

    #[test]
    fn test_double_toggle_restores_summary() {
        let mut lines = vec![line(1, 6, "A", 5.0), line(2, 4, "B", 7.0)];
        let before = reconcile(&lines, 10);

        lines[1].state = LineState::Deleted;
        let during = reconcile(&lines, 10);
        assert_ne!(before, during);

        lines[1].state = LineState::Active;
        let after = reconcile(&lines, 10);
        assert_eq!(before, after);
    }

    #[test]
    fn test_badge_state_reconciled() {
        let lines = vec![line(1, 10, "A", 2.0)];
        let summary = reconcile(&lines, 10);
        assert_eq!(BadgeState::for_summary(&summary), BadgeState::Reconciled);
    }

    #[test]
    fn test_badge_state_empty() {
        let summary = reconcile(&[], 10);
        assert_eq!(BadgeState::for_summary(&summary), BadgeState::Empty);
    }

    #[test]
    fn test_badge_state_quantity_mismatch() {
        let lines = vec![line(1, 6, "A", 5.0)];
        let summary = reconcile(&lines, 10);
        assert_eq!(
            BadgeState::for_summary(&summary),
            BadgeState::QuantityMismatch
        );
    }

    #[test]
    fn test_badge_state_invalid_beats_mismatch() {
        // Both a brand error and a short quantity: line errors win
        let lines = vec![line(1, 6, "", 5.0)];
        let summary = reconcile(&lines, 10);
        assert_eq!(BadgeState::for_summary(&summary), BadgeState::Invalid);
    }

    #[test]
    fn test_config_validate() {
        assert!(PurchaseFormConfig::default().validate().is_ok());

        let mut config = PurchaseFormConfig::default();
        config.currency_symbol = "  ".to_string();
        assert_eq!(config.validate(), Err(ConfigError::EmptyCurrencySymbol));

        let mut config = PurchaseFormConfig::default();
        config.max_lines = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroMaxLines));
    }

    #[test]
    fn test_format_money() {
        let config = PurchaseFormConfig::default();
        assert_eq!(config.format_money(5.8), "$5.80");
        assert_eq!(config.format_money(0.0), "$0.00");
    }

    #[test]
    fn test_payload_keeps_only_surviving_lines() {
        let mut deleted = line(2, 3, "B", 1.0);
        deleted.state = LineState::Deleted;
        let lines = vec![line(1, 10, "A", 2.0), deleted];
        let summary = reconcile(&lines, 10);
        let payload = PurchasePayload::assemble("OS-0042", &lines, &summary);

        assert_eq!(payload.reference, "OS-0042");
        assert_eq!(payload.lines.len(), 1);
        assert_eq!(payload.summed_quantity, 10);
        assert!(payload.is_valid);

        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.contains("\"reference\":\"OS-0042\""));
    }

    #[test]
    fn test_line_from_template() {
        let line = PurchaseLine::from_template(3, 1);
        assert_eq!(line.line_number, 3);
        assert_eq!(line.quantity, 1);
        assert!(line.brand.is_empty());
        assert_eq!(line.state, LineState::Active);
        assert!(!line.is_valid());
    }
}
