// src/gui/components/grid.rs
use eframe::egui::{self, RichText};

use super::card::{CardStyle, item_card};
use crate::{content, gui::app::App};

const CARD_W: f32 = 200.0;
const GAP: f32 = 12.0;
const MAX_COLS: usize = 4;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let page = app.shell.page();

    if page.is_empty() {
        ui.add_space(12.0);
        ui.label(RichText::new(content::EMPTY_LIST).weak());
        return;
    }

    let cols = (((ui.available_width() + GAP) / (CARD_W + GAP)).floor() as usize).clamp(1, MAX_COLS);

    egui::Grid::new("catalog_grid")
        .spacing([GAP, GAP])
        .show(ui, |ui| {
            for (i, item) in page.items.iter().enumerate() {
                let style = CardStyle {
                    width: CARD_W,
                    image_h: CARD_W,
                    cta: item.cta_label(),
                    platform_badge: None,
                    deal: false,
                    caption: true,
                };
                item_card(ui, &app.options, item, &style);
                if (i + 1) % cols == 0 {
                    ui.end_row();
                }
            }
        });
}
