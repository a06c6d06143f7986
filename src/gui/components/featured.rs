// src/gui/components/featured.rs
use eframe::egui;

use super::card::{CardStyle, item_card};
use crate::{content, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &App) {
    ui.heading(content::FEATURED_HEADING);
    ui.add_space(6.0);

    if app.sections.featured.is_empty() {
        return;
    }

    let style = CardStyle {
        width: 260.0,
        image_h: 160.0,
        cta: s!(content::FEATURED_CTA),
        platform_badge: None,
        deal: false,
        caption: false,
    };

    ui.horizontal_wrapped(|ui| {
        for item in &app.sections.featured {
            item_card(ui, &app.options, item, &style);
        }
    });
}
