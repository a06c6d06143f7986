// src/gui/components/tabs.rs
//
// Category tabs above the catalog list. Every click goes through
// `Shell::switch_tab`, which resets the page even for the active tab.

use eframe::egui::{self, RichText};

use crate::{config::state::Tab, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.scroll_to_list {
        ui.scroll_to_cursor(Some(egui::Align::TOP));
        app.scroll_to_list = false;
    }

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;
        let active = app.shell.active_tab();

        for tab in Tab::ALL {
            let text = format!("{} ({})", tab.label(), app.shell.pools().count(tab));
            let resp = ui.selectable_label(tab == active, RichText::new(text).size(16.0).strong());
            if resp.clicked() {
                app.shell.switch_tab(tab);
            }
        }
    });
}
