// src/gui/components/pager.rs
use eframe::egui;

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if !app.shell.show_pager() {
        return;
    }

    ui.add_space(12.0);
    ui.horizontal(|ui| {
        if ui.add_enabled(app.shell.can_go_prev(), egui::Button::new("Anterior")).clicked() {
            app.shell.prev_page();
        }

        ui.label(app.shell.page().readout());

        if ui.add_enabled(app.shell.can_go_next(), egui::Button::new("Siguiente")).clicked() {
            app.shell.next_page();
        }
    });
}
