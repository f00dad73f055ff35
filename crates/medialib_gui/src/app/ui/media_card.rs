//! Right-side asset card: preview, label chips, and per-dimension editing.

use super::super::*;
use eframe::egui::{self, RichText};
use medialib_core::models::FieldKey;

enum CardAction {
    RemoveLabel(FieldKey, usize),
    SubmitDraft(FieldKey),
}

impl MediaLibraryApp {
    pub(crate) fn render_media_card(&mut self, ctx: &egui::Context) {
        if !self.card_open {
            return;
        }
        let Some(asset) = self.sync.asset().cloned() else {
            return;
        };
        let sheet = self.sync.labels().cloned();
        let fetching = self.sync.is_fetching();

        let mut keep_open = true;
        let mut actions: Vec<CardAction> = Vec::new();

        egui::SidePanel::right("media_card")
            .default_width(340.0)
            .resizable(true)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(RichText::new("Asset").color(COLOR_TEXT_PRIMARY));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("Close").clicked() {
                            keep_open = false;
                        }
                    });
                });
                ui.label(
                    RichText::new(asset.id.as_str())
                        .small()
                        .monospace()
                        .color(COLOR_TEXT_MUTED),
                );
                ui.separator();

                ui.add(
                    egui::Image::new(asset.url.as_str())
                        .max_width(ui.available_width())
                        .show_loading_spinner(true),
                );
                ui.add(
                    egui::Label::new(RichText::new(&asset.name).color(COLOR_TEXT_PRIMARY))
                        .truncate(),
                );
                if !asset.bucket.is_empty() {
                    ui.label(
                        RichText::new(&asset.bucket)
                            .small()
                            .color(COLOR_TEXT_MUTED),
                    );
                }
                ui.hyperlink_to(
                    RichText::new("Open in browser").small().color(COLOR_ACCENT),
                    asset.url.as_str(),
                );
                ui.separator();

                egui::ScrollArea::vertical()
                    .auto_shrink([false; 2])
                    .show(ui, |ui| {
                        for key in FieldKey::ALL {
                            let saving = *self.field_saving.get(key);
                            ui.horizontal(|ui| {
                                ui.label(
                                    RichText::new(key.title())
                                        .small()
                                        .color(COLOR_TEXT_SECONDARY),
                                );
                                if saving {
                                    ui.spinner();
                                }
                            });

                            if fetching {
                                render_placeholder_chips(ui);
                            } else {
                                let labels =
                                    sheet.as_ref().map(|s| s.get(key)).unwrap_or_default();
                                ui.horizontal_wrapped(|ui| {
                                    for (idx, label) in labels.iter().enumerate() {
                                        if label_chip(ui, label, saving) {
                                            actions.push(CardAction::RemoveLabel(key, idx));
                                        }
                                    }
                                    if labels.is_empty() {
                                        ui.label(
                                            RichText::new("none")
                                                .small()
                                                .italics()
                                                .color(COLOR_TEXT_MUTED),
                                        );
                                    }
                                });

                                ui.horizontal(|ui| {
                                    let draft = self.field_drafts.get_mut(key);
                                    let response = ui.add_enabled(
                                        !saving,
                                        egui::TextEdit::singleline(draft)
                                            .hint_text(format!("Add to {}...", key.as_str()))
                                            .desired_width(180.0),
                                    );
                                    let submitted = response.lost_focus()
                                        && ui
                                            .input(|input| input.key_pressed(egui::Key::Enter));
                                    let clicked = ui
                                        .add_enabled(!saving, egui::Button::new("Add"))
                                        .clicked();
                                    if submitted || clicked {
                                        actions.push(CardAction::SubmitDraft(key));
                                    }
                                });
                            }
                            ui.add_space(10.0);
                        }
                    });
            });

        for action in actions {
            match action {
                CardAction::RemoveLabel(key, idx) => self.remove_label(key, idx),
                CardAction::SubmitDraft(key) => self.submit_field_draft(key),
            }
        }
        if !keep_open {
            self.close_card();
        }
    }
}

/// Fixed-weight skeleton chips shown while the bulk label fetch is in flight,
/// so the card does not collapse and reflow when results land.
fn render_placeholder_chips(ui: &mut egui::Ui) {
    ui.horizontal_wrapped(|ui| {
        for _ in 0..PLACEHOLDER_CHIPS {
            egui::Frame::new()
                .fill(COLOR_BG_TERTIARY)
                .corner_radius(egui::CornerRadius::same(8))
                .inner_margin(egui::Margin::symmetric(14, 4))
                .show(ui, |ui| {
                    ui.label(RichText::new("···").color(COLOR_TEXT_MUTED));
                });
        }
    });
}

/// One removable label chip. Returns `true` when its remove button was
/// clicked.
fn label_chip(ui: &mut egui::Ui, label: &str, saving: bool) -> bool {
    let mut remove = false;
    egui::Frame::new()
        .fill(COLOR_CHIP_FILL)
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::symmetric(8, 3))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(label).small().color(COLOR_TEXT_PRIMARY));
                if ui
                    .add_enabled(!saving, egui::Button::new(RichText::new("×").small()).frame(false))
                    .clicked()
                {
                    remove = true;
                }
            });
        });
    remove
}
