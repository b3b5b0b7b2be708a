use eframe::egui;

use crate::data::model::Figure;
use crate::ui::plot;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct FigureApp {
    pub figure: Figure,
}

impl eframe::App for FigureApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Central panel: stacked plots ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::stacked_panels(ui, &self.figure);
        });
    }
}

/// Open a native window showing the figure and block until it is closed.
pub fn show(window_title: &str, figure: Figure) -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 1080.0])
            .with_min_inner_size([480.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        window_title,
        options,
        Box::new(move |_cc| Ok(Box::new(FigureApp { figure }))),
    )
}
