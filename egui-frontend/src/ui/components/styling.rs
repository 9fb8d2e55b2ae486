//! # Styling Functions
//!
//! Drawing utility functions and global style setup for the purchase form.
//!
//! ## Key Functions:
//! - `setup_purchase_form_style()` - Configure global egui styling
//! - `card_frame()` - Card frame for the form sections
//! - `draw_table_header_background()` - Solid fill behind table headers

use eframe::egui;
use super::theme::CURRENT_THEME;

/// Setup global styling for the purchase form
pub fn setup_purchase_form_style(ctx: &egui::Context) {
    ctx.set_style({
        let mut style = (*ctx.style()).clone();

        style.visuals.button_frame = true;
        // Text edits use extreme_bg_color in egui 0.28
        style.visuals.extreme_bg_color = CURRENT_THEME.interactive.field_background;

        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(24.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(15.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(15.0, egui::FontFamily::Proportional),
        );

        style.spacing.button_padding = egui::vec2(10.0, 6.0);
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.visuals.widgets.inactive.rounding = egui::Rounding::same(6.0);
        style.visuals.widgets.active.rounding = egui::Rounding::same(6.0);
        style.visuals.widgets.hovered.rounding = egui::Rounding::same(6.0);

        style
    });
}

/// Card frame used for the form sections: background, rounding and a
/// subtle offset shadow
pub fn card_frame() -> egui::Frame {
    egui::Frame::none()
        .fill(CURRENT_THEME.layout.card_background)
        .rounding(egui::Rounding::same(10.0))
        .inner_margin(egui::Margin::same(12.0))
        .shadow(egui::epaint::Shadow {
            offset: egui::vec2(2.0, 2.0),
            blur: 4.0,
            spread: 0.0,
            color: CURRENT_THEME.layout.card_shadow,
        })
}

/// Draw the solid fill behind a line-table header column
pub fn draw_table_header_background(ui: &mut egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, egui::Rounding::ZERO, CURRENT_THEME.layout.table_header);
}
