//! # UI Components Module
//!
//! This module organizes the UI components of the purchase form.
//!
//! ## Module Organization:
//! - `line_editor` - Editable purchase-line table
//! - `summary_panel` - Reconciliation badge, totals and submit button
//! - `styling` - Drawing utilities and global style setup
//! - `theme` - Centralized color configuration

pub mod line_editor;
pub mod styling;
pub mod summary_panel;
pub mod theme;

pub use line_editor::render_line_table;
pub use styling::{card_frame, draw_table_header_background, setup_purchase_form_style};
pub use summary_panel::{badge_parts, render_submit_button, render_summary_panel};
pub use theme::*;
