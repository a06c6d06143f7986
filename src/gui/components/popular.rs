// src/gui/components/popular.rs
//
// "Lo Más Popular en Amazon" / "Cursos Más Solicitados" strips.
// "Ver todos" switches the list to the same tab and scrolls to it.

use eframe::egui::{self, Align, Layout};

use super::card::{CardStyle, item_card};
use crate::{config::state::Tab, content, gui::app::App, sections::is_deal};

pub fn draw(ui: &mut egui::Ui, app: &mut App, tab: Tab) {
    let heading = match tab {
        Tab::Products => content::POPULAR_PRODUCTS_HEADING,
        Tab::Courses => content::POPULAR_COURSES_HEADING,
    };

    let mut see_all = false;
    ui.horizontal(|ui| {
        ui.heading(heading);
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            see_all = ui.link(content::SEE_ALL).clicked();
        });
    });
    ui.add_space(6.0);

    let image_h = match tab {
        Tab::Products => 170.0, // square-ish
        Tab::Courses => 96.0,   // 16:9
    };

    ui.horizontal_wrapped(|ui| {
        for item in app.sections.popular(tab) {
            let style = CardStyle {
                width: 170.0,
                image_h,
                cta: item.cta_label(),
                platform_badge: match tab {
                    Tab::Courses => item.kind.map(|k| k.platform_label()),
                    Tab::Products => None,
                },
                deal: is_deal(item, tab),
                caption: false,
            };
            item_card(ui, &app.options, item, &style);
        }
    });

    if see_all {
        app.shell.switch_tab(tab);
        app.request_list_scroll();
    }
}
