//! # Summary Panel
//!
//! Renders the reconciliation summary card: counted units against the
//! target, the weighted-average unit cost, the badge, and the inline error
//! list. Also owns the submit button styling.
//!
//! The badge and button emphasis are pure functions of the summary; the
//! button is never disabled because final validation belongs to the
//! receiving side.

use eframe::egui;
use shared::{BadgeState, PurchaseFormConfig, ReconciliationError, ReconciliationSummary};

use super::theme::CURRENT_THEME;

/// Badge label and fill color for the current summary
pub fn badge_parts(summary: &ReconciliationSummary) -> (String, egui::Color32) {
    match BadgeState::for_summary(summary) {
        BadgeState::Reconciled => (
            "✔ Reconciled".to_string(),
            CURRENT_THEME.badge.reconciled,
        ),
        BadgeState::Empty => ("No lines yet".to_string(), CURRENT_THEME.badge.empty),
        BadgeState::QuantityMismatch => {
            let delta = summary
                .errors
                .iter()
                .find_map(|e| match e {
                    ReconciliationError::QuantityShort(n) => Some(format!("⚠ Short by {} units", n)),
                    ReconciliationError::QuantityOver(n) => Some(format!("⚠ Over by {} units", n)),
                    _ => None,
                })
                .unwrap_or_else(|| "⚠ Quantity mismatch".to_string());
            (delta, CURRENT_THEME.badge.mismatch)
        }
        BadgeState::Invalid => ("✘ Check line errors".to_string(), CURRENT_THEME.badge.invalid),
    }
}

/// Render the reconciliation summary card
pub fn render_summary_panel(
    ui: &mut egui::Ui,
    summary: &ReconciliationSummary,
    config: &PurchaseFormConfig,
) {
    ui.horizontal(|ui| {
        let (label, fill) = badge_parts(summary);
        egui::Frame::none()
            .fill(fill)
            .rounding(egui::Rounding::same(10.0))
            .inner_margin(egui::Margin::symmetric(10.0, 4.0))
            .show(ui, |ui| {
                ui.colored_label(
                    CURRENT_THEME.typography.white,
                    egui::RichText::new(label).strong(),
                );
            });

        ui.add_space(12.0);
        ui.label(format!(
            "Units: {} of {}",
            summary.summed_quantity, summary.total_quantity_target
        ));
        ui.add_space(12.0);
        ui.label(format!(
            "Weighted average: {}",
            config.format_money(summary.weighted_average_cost)
        ));
        ui.add_space(12.0);
        ui.label(
            egui::RichText::new(format!(
                "Order total: {}",
                config.format_money(summary.total_cost)
            ))
            .strong(),
        );
    });

    for message in summary.error_messages() {
        ui.colored_label(CURRENT_THEME.typography.error, format!("• {}", message));
    }
}

/// Render the submit button, emphasized only while the form reconciles.
/// Returns true when clicked; never disabled.
pub fn render_submit_button(ui: &mut egui::Ui, summary: &ReconciliationSummary) -> bool {
    let fill = if summary.is_valid {
        CURRENT_THEME.interactive.submit_emphasis
    } else {
        CURRENT_THEME.interactive.submit_muted
    };

    let button = egui::Button::new(
        egui::RichText::new("💾 Save purchase")
            .color(CURRENT_THEME.typography.white)
            .strong(),
    )
    .fill(fill)
    .rounding(egui::Rounding::same(8.0))
    .min_size(egui::vec2(160.0, 36.0));

    let response = ui.add(button);
    let clicked = response.clicked();
    if !summary.is_valid {
        response.on_hover_text("Totals don't reconcile yet; they will be re-checked on save");
    }
    clicked
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{reconcile, LineState, PurchaseLine};

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
    fn test_badge_reconciled() {
        let summary = reconcile(&[line(1, 10, "A", 2.0)], 10);
        let (label, fill) = badge_parts(&summary);
        assert_eq!(label, "✔ Reconciled");
        assert_eq!(fill, CURRENT_THEME.badge.reconciled);
    }

    #[test]
    fn test_badge_empty() {
        let summary = reconcile(&[], 10);
        let (label, fill) = badge_parts(&summary);
        assert_eq!(label, "No lines yet");
        assert_eq!(fill, CURRENT_THEME.badge.empty);
    }

    #[test]
    fn test_badge_shows_signed_difference() {
        let short = reconcile(&[line(1, 6, "A", 5.0)], 10);
        assert_eq!(badge_parts(&short).0, "⚠ Short by 4 units");

        let over = reconcile(&[line(1, 13, "A", 5.0)], 10);
        assert_eq!(badge_parts(&over).0, "⚠ Over by 3 units");
    }

    #[test]
    fn test_badge_invalid_for_line_errors() {
        let summary = reconcile(&[line(1, 10, "", 5.0)], 10);
        let (label, fill) = badge_parts(&summary);
        assert_eq!(label, "✘ Check line errors");
        assert_eq!(fill, CURRENT_THEME.badge.invalid);
    }
}
