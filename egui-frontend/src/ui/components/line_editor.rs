//! # Line Editor
//!
//! Renders the editable purchase-line table: one row per formset entry with
//! quantity, brand, model and unit-cost fields plus a per-row action.
//!
//! ## Behavior:
//! - Rows from persisted records get a Delete button that soft-deletes;
//!   deleted rows stay in the table dimmed, with a Restore button.
//! - Rows added in this session get a Remove button that drops them.
//! - Field edits land directly in the formset state; the caller reconciles
//!   on every frame, so no change tracking happens here.

use eframe::egui;
use egui_extras::{Column, TableBuilder};
use shared::PurchaseFormConfig;

use super::styling::draw_table_header_background;
use super::theme::CURRENT_THEME;
use crate::ui::state::LineFormset;

/// Row mutation requested from inside the table, applied after rendering
enum LineAction {
    Toggle(usize),
    Remove(usize),
}

/// Render the purchase line table
pub fn render_line_table(ui: &mut egui::Ui, formset: &mut LineFormset, config: &PurchaseFormConfig) {
    if formset.rows.is_empty() {
        ui.label(
            egui::RichText::new("No purchase lines yet. Add one to get started.")
                .color(CURRENT_THEME.typography.secondary),
        );
        return;
    }

    let mut action: Option<LineAction> = None;
    let currency = config.currency_symbol.clone();
    let max_brand = config.max_brand_length;
    let max_model = config.max_model_length;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(false)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::exact(40.0)) // line number
        .column(Column::exact(70.0)) // quantity
        .column(Column::exact(170.0)) // brand
        .column(Column::exact(170.0)) // model
        .column(Column::exact(100.0)) // unit cost
        .column(Column::exact(100.0)) // line total
        .column(Column::exact(110.0)) // actions
        .header(32.0, |mut header| {
            for title in ["#", "QTY", "BRAND", "MODEL", "UNIT COST", "TOTAL", ""] {
                header.col(|ui| {
                    let rect = ui.max_rect();
                    draw_table_header_background(ui, rect);
                    ui.with_layout(
                        egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
                        |ui| {
                            ui.colored_label(
                                CURRENT_THEME.typography.white,
                                egui::RichText::new(title).strong(),
                            );
                        },
                    );
                });
            }
        })
        .body(|mut body| {
            for index in 0..formset.rows.len() {
                let row_data = &mut formset.rows[index];
                body.row(34.0, |mut table_row| {
                    // Line number; deleted rows keep their stale number dimmed
                    table_row.col(|ui| {
                        if row_data.deleted {
                            ui.label(
                                egui::RichText::new(format!("{}", row_data.line_number))
                                    .weak()
                                    .strikethrough(),
                            );
                        } else {
                            ui.label(
                                egui::RichText::new(format!("{}", row_data.line_number)).strong(),
                            );
                        }
                    });

                    let editable = !row_data.deleted;

                    table_row.col(|ui| {
                        ui.add_enabled(
                            editable,
                            egui::TextEdit::singleline(&mut row_data.quantity_input)
                                .desired_width(50.0),
                        );
                    });
                    table_row.col(|ui| {
                        ui.add_enabled(
                            editable,
                            egui::TextEdit::singleline(&mut row_data.brand)
                                .hint_text("Brand")
                                .char_limit(max_brand)
                                .desired_width(150.0),
                        );
                    });
                    table_row.col(|ui| {
                        ui.add_enabled(
                            editable,
                            egui::TextEdit::singleline(&mut row_data.model)
                                .hint_text("Model")
                                .char_limit(max_model)
                                .desired_width(150.0),
                        );
                    });
                    table_row.col(|ui| {
                        ui.label(&currency);
                        ui.add_enabled(
                            editable,
                            egui::TextEdit::singleline(&mut row_data.unit_cost_input)
                                .hint_text("0.00")
                                .desired_width(60.0),
                        );
                    });
                    table_row.col(|ui| {
                        let total = format!("{}{:.2}", currency, row_data.line_total());
                        if row_data.deleted {
                            ui.label(egui::RichText::new(total).weak().strikethrough());
                        } else {
                            ui.label(total);
                        }
                    });

                    // Action: restore / soft-delete / hard-remove
                    table_row.col(|ui| {
                        if row_data.deleted {
                            if ui.button("↩ Restore").clicked() {
                                action = Some(LineAction::Toggle(index));
                            }
                        } else if row_data.persisted {
                            let delete = egui::Button::new(
                                egui::RichText::new("🗑 Delete")
                                    .color(CURRENT_THEME.typography.white),
                            )
                            .fill(CURRENT_THEME.interactive.danger);
                            if ui
                                .add(delete)
                                .on_hover_text("Marks the line deleted; Restore undoes it")
                                .clicked()
                            {
                                action = Some(LineAction::Toggle(index));
                            }
                        } else if ui.button("✖ Remove").clicked() {
                            action = Some(LineAction::Remove(index));
                        }
                    });
                });
            }
        });

    match action {
        Some(LineAction::Toggle(index)) => formset.toggle_line(index),
        Some(LineAction::Remove(index)) => formset.remove_line(index),
        None => {}
    }
}
