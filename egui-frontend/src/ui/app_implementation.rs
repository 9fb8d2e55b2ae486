use eframe::egui;

use crate::ui::app_state::PurchaseFormApp;
use crate::ui::components::theme::CURRENT_THEME;
use crate::ui::components::{
    card_frame, render_line_table, render_submit_button, render_summary_panel,
    setup_purchase_form_style,
};

impl eframe::App for PurchaseFormApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        setup_purchase_form_style(ctx);

        // Recalculation is idempotent and cheap, so it runs every frame
        // instead of tracking which field changed
        self.recalculate();

        // Clear messages after a delay
        if self.error_message.is_some() || self.success_message.is_some() {
            ctx.request_repaint_after(std::time::Duration::from_secs(5));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_header(ui);

            ui.separator();

            self.render_messages(ui);
            self.render_order_section(ui);

            ui.add_space(8.0);
            self.render_lines_section(ui);

            ui.add_space(8.0);
            self.render_summary_section(ui);
        });
    }
}

impl PurchaseFormApp {
    /// Render the header with the app title and the form date
    fn render_header(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new("🧾 Purchase Reconciliation")
                    .font(egui::FontId::new(26.0, egui::FontFamily::Proportional))
                    .strong()
                    .color(CURRENT_THEME.typography.primary),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let today = chrono::Local::now().format("%Y-%m-%d");
                ui.label(
                    egui::RichText::new(format!("📅 {}", today))
                        .color(CURRENT_THEME.typography.secondary),
                );
            });
        });
    }

    /// Render error and success messages
    fn render_messages(&self, ui: &mut egui::Ui) {
        if let Some(error) = &self.error_message {
            ui.colored_label(CURRENT_THEME.typography.error, format!("❌ {}", error));
        }
        if let Some(success) = &self.success_message {
            ui.colored_label(CURRENT_THEME.typography.success, format!("✅ {}", success));
        }
    }

    /// Render the order reference and target quantity fields
    fn render_order_section(&mut self, ui: &mut egui::Ui) {
        card_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label("Order reference:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.order_reference)
                        .hint_text("OS-0000")
                        .desired_width(120.0),
                );

                ui.add_space(20.0);

                ui.label("Units purchased:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.target_quantity_input)
                        .hint_text("0")
                        .desired_width(60.0),
                );
            });
        });
    }

    /// Render the purchase line table with the add-line button
    fn render_lines_section(&mut self, ui: &mut egui::Ui) {
        card_frame().show(ui, |ui| {
            ui.vertical(|ui| {
                ui.label(
                    egui::RichText::new("Purchase lines")
                        .font(egui::FontId::new(18.0, egui::FontFamily::Proportional))
                        .strong(),
                );
                ui.add_space(6.0);

                render_line_table(ui, &mut self.formset, &self.config);

                ui.add_space(6.0);
                if ui.button("➕ Add line").clicked() {
                    if self.formset.add_line() {
                        self.clear_messages();
                    } else {
                        self.error_message = Some(format!(
                            "This purchase cannot have more than {} lines",
                            self.config.max_lines
                        ));
                    }
                }
            });
        });
    }

    /// Render the reconciliation summary and the submit button
    fn render_summary_section(&mut self, ui: &mut egui::Ui) {
        card_frame().show(ui, |ui| {
            ui.vertical(|ui| {
                render_summary_panel(ui, &self.summary, &self.config);

                ui.add_space(8.0);
                if render_submit_button(ui, &self.summary) {
                    self.submit_purchase();
                }
            });
        });
    }
}
