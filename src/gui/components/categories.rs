// src/gui/components/categories.rs
use eframe::egui::{self, RichText};

use crate::content;

pub fn draw(ui: &mut egui::Ui) {
    ui.heading(content::CATEGORIES_HEADING);
    ui.add_space(6.0);

    ui.horizontal_wrapped(|ui| {
        for tile in content::CATEGORIES {
            // Tiles are decorative for now; there is no category field in the cache.
            let text = RichText::new(format!("{}\n{}", tile.icon, tile.name)).size(16.0);
            ui.add(egui::Button::new(text).min_size(egui::vec2(130.0, 70.0)));
        }
    });
}
