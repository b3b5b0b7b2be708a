use eframe::egui::{Color32, Ui};
use egui_plot::{Line, Plot, PlotPoints};

use crate::color;
use crate::data::model::{Figure, Y_LABEL};

// ---------------------------------------------------------------------------
// Stacked benchmark panels (central panel)
// ---------------------------------------------------------------------------

/// Render one plot per operation, stacked vertically in figure order.
pub fn stacked_panels(ui: &mut Ui, figure: &Figure) {
    let spacing = ui.spacing().item_spacing.y;
    let panel_height =
        (ui.available_height() / figure.panels.len() as f32 - spacing - 24.0).max(80.0);

    for (index, panel) in figure.panels.iter().enumerate() {
        let (r, g, b) = color::operation_color(panel.operation);

        ui.strong(panel.operation.name());

        let points: PlotPoints = figure.points(index).map(|(x, y)| [x, y]).collect();
        let line = Line::new(points)
            .name(panel.operation.name())
            .color(Color32::from_rgb(r, g, b))
            .width(1.5);

        Plot::new(panel.operation.name())
            .height(panel_height)
            .x_axis_label(figure.x_label)
            .y_axis_label(Y_LABEL)
            .allow_boxed_zoom(true)
            .allow_drag(true)
            .allow_scroll(true)
            .allow_zoom(true)
            .show(ui, |plot_ui| plot_ui.line(line));
    }
}
