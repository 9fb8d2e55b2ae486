//! # Theme Configuration
//!
//! This module provides centralized color configuration for the purchase
//! form app. All visual styling should use these constants so the widget
//! stays consistent and a palette change stays a one-file edit.

use eframe::egui::Color32;

/// Main theme configuration structure
#[derive(Debug, Clone)]
pub struct Theme {
    /// Interactive element colors (buttons, text fields)
    pub interactive: InteractiveColors,
    /// Background and container colors
    pub layout: LayoutColors,
    /// Text colors
    pub typography: TypographyColors,
    /// Reconciliation badge colors
    pub badge: BadgeColors,
}

/// Colors for interactive elements
#[derive(Debug, Clone)]
pub struct InteractiveColors {
    /// Fill for the submit button while the form reconciles
    pub submit_emphasis: Color32,
    /// Fill for the submit button while it does not
    pub submit_muted: Color32,
    /// Background of editable text fields
    pub field_background: Color32,
    /// Destructive action (delete line)
    pub danger: Color32,
}

/// Layout and container colors
#[derive(Debug, Clone)]
pub struct LayoutColors {
    pub card_background: Color32,
    pub card_shadow: Color32,
    /// Painted behind the line-table header row
    pub table_header: Color32,
    /// Overlay tint for soft-deleted rows
    pub deleted_row: Color32,
}

/// Text colors
#[derive(Debug, Clone)]
pub struct TypographyColors {
    pub primary: Color32,
    pub secondary: Color32,
    pub error: Color32,
    pub success: Color32,
    pub white: Color32,
}

/// Badge colors, one fill per badge state
#[derive(Debug, Clone)]
pub struct BadgeColors {
    pub reconciled: Color32,
    pub empty: Color32,
    pub mismatch: Color32,
    pub invalid: Color32,
}

/// The active theme
pub const CURRENT_THEME: Theme = Theme {
    interactive: InteractiveColors {
        submit_emphasis: Color32::from_rgb(46, 125, 50),
        submit_muted: Color32::from_rgb(158, 158, 158),
        field_background: Color32::from_rgb(245, 246, 250),
        danger: Color32::from_rgb(198, 40, 40),
    },
    layout: LayoutColors {
        card_background: Color32::from_rgb(255, 255, 255),
        card_shadow: Color32::from_rgba_premultiplied(0, 0, 0, 25),
        table_header: Color32::from_rgb(55, 71, 110),
        deleted_row: Color32::from_rgba_premultiplied(120, 120, 120, 40),
    },
    typography: TypographyColors {
        primary: Color32::from_rgb(40, 40, 40),
        secondary: Color32::from_rgb(110, 110, 110),
        error: Color32::from_rgb(220, 50, 50),
        success: Color32::from_rgb(46, 125, 50),
        white: Color32::WHITE,
    },
    badge: BadgeColors {
        reconciled: Color32::from_rgb(46, 125, 50),
        empty: Color32::from_rgb(120, 120, 120),
        mismatch: Color32::from_rgb(255, 140, 0),
        invalid: Color32::from_rgb(198, 40, 40),
    },
};
