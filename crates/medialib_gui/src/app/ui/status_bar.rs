//! Bottom status bar rendering for transient feedback and backend metadata.

use super::super::*;
use eframe::egui;

impl MediaLibraryApp {
    /// Renders the bottom status bar with activity state and the API endpoint.
    pub(crate) fn render_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let mut has_primary_item = false;
                    if self.upload_in_flight {
                        ui.label(
                            egui::RichText::new("Uploading...").color(COLOR_TEXT_SECONDARY),
                        );
                        has_primary_item = true;
                    }
                    if self.sync.is_fetching() {
                        if has_primary_item {
                            ui.separator();
                        }
                        ui.label(
                            egui::RichText::new("Fetching labels...").color(COLOR_TEXT_SECONDARY),
                        );
                        has_primary_item = true;
                    }
                    if let Some(status) = &self.status {
                        if has_primary_item {
                            ui.separator();
                        }
                        ui.label(egui::RichText::new(&status.text).color(egui::Color32::YELLOW));
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(format!("API: {}", self.api_url))
                                .small()
                                .color(COLOR_TEXT_MUTED),
                        );
                    });
                });
            });
    }
}
