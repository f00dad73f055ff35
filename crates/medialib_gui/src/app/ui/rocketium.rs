//! Rocketium catalog surface: debounced autocomplete plus paged search.

use super::super::*;
use eframe::egui::{self, RichText};

impl MediaLibraryApp {
    pub(crate) fn render_rocketium(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut submit = false;
            let mut picked_suggestion: Option<String> = None;

            let mut query = self.rocketium_query.clone();
            let response = ui.add(
                egui::TextEdit::singleline(&mut query)
                    .hint_text("Search the Rocketium catalog...")
                    .desired_width(420.0),
            );
            if response.changed() {
                self.set_rocketium_query(query);
            }
            if response.lost_focus() && ui.input(|input| input.key_pressed(egui::Key::Enter)) {
                submit = true;
            }

            if !self.rocketium_suggestions.is_empty() && !self.rocketium_query.trim().is_empty() {
                let popover_pos = response.rect.left_bottom() + egui::vec2(0.0, 4.0);
                egui::Area::new(egui::Id::new("rocketium_suggestions"))
                    .fixed_pos(popover_pos)
                    .order(egui::Order::Foreground)
                    .show(ctx, |ui| {
                        ui.set_width(response.rect.width());
                        egui::Frame::popup(ui.style())
                            .fill(COLOR_BG_SECONDARY)
                            .stroke(egui::Stroke::new(1.0, COLOR_BORDER))
                            .show(ui, |ui| {
                                for entry in &self.rocketium_suggestions {
                                    if ui
                                        .selectable_label(
                                            false,
                                            RichText::new(&entry.original_file_name),
                                        )
                                        .clicked()
                                    {
                                        picked_suggestion =
                                            Some(entry.original_file_name.clone());
                                    }
                                }
                            });
                    });
            }

            ui.add_space(8.0);
            if self.rocketium_in_flight {
                ui.label(RichText::new("Searching...").color(COLOR_TEXT_MUTED));
            } else if !self.rocketium_submitted.is_empty() {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(format!(
                            "\"{}\" — page {}",
                            self.rocketium_submitted, self.rocketium_page
                        ))
                        .small()
                        .color(COLOR_TEXT_MUTED),
                    );
                    if ui
                        .add_enabled(self.rocketium_page > 1, egui::Button::new("Prev"))
                        .clicked()
                    {
                        self.rocketium_prev_page();
                    }
                    if ui
                        .add_enabled(!self.rocketium_results.is_empty(), egui::Button::new("Next"))
                        .clicked()
                    {
                        self.rocketium_next_page();
                    }
                });
            }

            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    ui.horizontal_wrapped(|ui| {
                        for entry in &self.rocketium_results {
                            egui::Frame::group(ui.style())
                                .fill(COLOR_BG_SECONDARY)
                                .stroke(egui::Stroke::new(1.0, COLOR_BORDER))
                                .show(ui, |ui| {
                                    ui.set_width(THUMBNAIL_SIZE);
                                    ui.vertical(|ui| {
                                        ui.add(
                                            egui::Image::new(entry.link.as_str())
                                                .fit_to_exact_size(egui::vec2(
                                                    THUMBNAIL_SIZE,
                                                    THUMBNAIL_SIZE,
                                                ))
                                                .show_loading_spinner(true),
                                        );
                                        ui.add(
                                            egui::Label::new(
                                                RichText::new(&entry.original_file_name)
                                                    .small()
                                                    .color(COLOR_TEXT_SECONDARY),
                                            )
                                            .truncate(),
                                        );
                                        ui.label(
                                            RichText::new(
                                                entry
                                                    .uploaded_at
                                                    .format("%Y-%m-%d")
                                                    .to_string(),
                                            )
                                            .small()
                                            .color(COLOR_TEXT_MUTED),
                                        );
                                    });
                                });
                        }
                    });
                });

            if let Some(name) = picked_suggestion {
                self.set_rocketium_query(name);
                submit = true;
            }
            if submit {
                self.submit_rocketium_search();
            }
        });
    }
}
