//! Library search surface: debounced autocomplete popover plus full results.

use super::super::*;
use super::folders::asset_tile;
use eframe::egui::{self, RichText};
use medialib_core::models::{Asset, SearchHit};

impl MediaLibraryApp {
    pub(crate) fn render_search(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut pending_asset: Option<Asset> = None;
            let mut submit = false;

            let mut query = self.search_query.clone();
            let response = ui.add(
                egui::TextEdit::singleline(&mut query)
                    .hint_text("Search assets by name or label...")
                    .desired_width(420.0),
            );
            if response.changed() {
                self.set_search_query(query);
            }
            if response.lost_focus() && ui.input(|input| input.key_pressed(egui::Key::Enter)) {
                submit = true;
            }

            if !self.suggestions.is_empty() && !self.search_query.trim().is_empty() {
                let popover_pos = response.rect.left_bottom() + egui::vec2(0.0, 4.0);
                egui::Area::new(egui::Id::new("search_suggestions"))
                    .fixed_pos(popover_pos)
                    .order(egui::Order::Foreground)
                    .show(ctx, |ui| {
                        ui.set_width(response.rect.width());
                        egui::Frame::popup(ui.style())
                            .fill(COLOR_BG_SECONDARY)
                            .stroke(egui::Stroke::new(1.0, COLOR_BORDER))
                            .show(ui, |ui| {
                                for hit in &self.suggestions {
                                    if suggestion_row(ui, hit).clicked() {
                                        pending_asset = Some(hit.to_asset());
                                    }
                                }
                            });
                    });
            }

            ui.add_space(8.0);
            if self.search_in_flight {
                ui.label(RichText::new("Searching...").color(COLOR_TEXT_MUTED));
            } else if !self.search_submitted.is_empty() {
                ui.label(
                    RichText::new(format!(
                        "{} results for \"{}\"",
                        self.search_results.len(),
                        self.search_submitted
                    ))
                    .small()
                    .color(COLOR_TEXT_MUTED),
                );
            }

            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    ui.horizontal_wrapped(|ui| {
                        for hit in &self.search_results {
                            let asset = hit.to_asset();
                            ui.vertical(|ui| {
                                if asset_tile(
                                    ui,
                                    &asset,
                                    self.selected_asset_id() == Some(&asset.id),
                                )
                                .clicked()
                                {
                                    pending_asset = Some(asset.clone());
                                }
                                let matched = hit.matched_custom_fields();
                                if !matched.is_empty() {
                                    ui.label(
                                        RichText::new(format!(
                                            "matched in {}",
                                            matched.join(", ")
                                        ))
                                        .small()
                                        .color(COLOR_TEXT_MUTED),
                                    );
                                }
                            });
                        }
                    });
                });

            if submit {
                self.submit_search();
            }
            if let Some(asset) = pending_asset {
                self.suggestions.clear();
                self.select_asset(asset);
            }
        });
    }
}

fn suggestion_row(ui: &mut egui::Ui, hit: &SearchHit) -> egui::Response {
    let matched = hit.matched_custom_fields();
    let label = if matched.is_empty() {
        hit.name.clone()
    } else {
        format!("{}  ({})", hit.name, matched.join(", "))
    };
    ui.selectable_label(false, RichText::new(label).color(COLOR_TEXT_PRIMARY))
}
