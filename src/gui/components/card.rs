// src/gui/components/card.rs
//
// Shared item card + thumbnail used by every section that shows products.

use eframe::egui::{self, Align2, Color32, FontId, RichText, Sense, Vec2};

use crate::{catalog::CatalogItem, config::options::AppOptions, content};

pub const PRICE_GREEN: Color32 = Color32::from_rgb(0x16, 0xA3, 0x4A);
pub const DEAL_RED: Color32 = Color32::from_rgb(0xEF, 0x44, 0x44);
pub const BADGE_INDIGO: Color32 = Color32::from_rgb(0x63, 0x66, 0xF1);

/// What differs between the featured, popular and grid cards.
pub struct CardStyle {
    pub width: f32,
    pub image_h: f32,
    pub cta: String,
    pub platform_badge: Option<&'static str>,
    pub deal: bool,
    pub caption: bool,
}

/// Remote image if its host is allowed, a placeholder tile otherwise.
pub fn thumbnail(ui: &mut egui::Ui, options: &AppOptions, url: &str, size: Vec2, alt: &str) {
    if !url.is_empty() && options.images.allows(url) {
        ui.add(egui::Image::new(url).fit_to_exact_size(size))
            .on_hover_text(alt);
        return;
    }

    let (rect, resp) = ui.allocate_exact_size(size, Sense::hover());
    let visuals = ui.visuals();
    ui.painter().rect_filled(rect, 6.0, visuals.faint_bg_color);
    ui.painter().text(
        rect.center(),
        Align2::CENTER_CENTER,
        "🖼",
        FontId::proportional(size.y.min(48.0) * 0.5),
        visuals.weak_text_color(),
    );
    resp.on_hover_text(alt);
}

fn pill(ui: &mut egui::Ui, text: &str, fill: Color32) {
    egui::Frame::new()
        .fill(fill)
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(6, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(text).small().strong().color(Color32::WHITE));
        });
}

pub fn item_card(ui: &mut egui::Ui, options: &AppOptions, item: &CatalogItem, style: &CardStyle) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(style.width);
        ui.vertical(|ui| {
            thumbnail(ui, options, &item.image, Vec2::new(style.width, style.image_h), &item.title);

            if style.platform_badge.is_some() || style.deal {
                ui.horizontal(|ui| {
                    if let Some(badge) = style.platform_badge {
                        pill(ui, badge, BADGE_INDIGO);
                    }
                    if style.deal {
                        pill(ui, content::DEAL_BADGE, DEAL_RED);
                    }
                });
            }

            ui.add(egui::Label::new(RichText::new(&item.title).strong()).truncate());
            ui.label(RichText::new(&item.price).size(18.0).strong().color(PRICE_GREEN));

            let link = options.affiliate.link(&item.affiliate);
            ui.hyperlink_to(RichText::new(&style.cta).strong(), link.as_ref());

            if style.caption {
                ui.label(RichText::new(content::AFFILIATE_CAPTION).small().weak());
            }
        });
    });
}
