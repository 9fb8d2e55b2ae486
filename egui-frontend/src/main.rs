use eframe::egui;
use log::{error, info};

mod ui;

use ui::app_state::PurchaseFormApp;

fn main() -> Result<(), eframe::Error> {
    // Initialize logging for debugging
    env_logger::init();
    info!("Starting purchase form application");

    // Window sized for the line table plus the summary panel
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 720.0])
            .with_min_inner_size([760.0, 540.0])
            .with_title("Purchase Reconciliation")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "Purchase Reconciliation",
        options,
        Box::new(|cc| {
            // A configuration failure here means the form template and the
            // widget disagree, so abort with the message instead of limping
            match PurchaseFormApp::new(cc) {
                Ok(app) => {
                    info!("Successfully initialized purchase form app");
                    Ok(Box::new(app))
                }
                Err(e) => {
                    error!("Failed to initialize app: {}", e);
                    Err(format!("Failed to initialize app: {}", e).into())
                }
            }
        }),
    )
}
