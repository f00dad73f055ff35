//! Upload surface: file picking and submission.

use super::super::*;
use eframe::egui::{self, RichText};

impl MediaLibraryApp {
    pub(crate) fn render_upload(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(RichText::new("Upload an image").color(COLOR_TEXT_PRIMARY));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui
                    .add_enabled(!self.upload_in_flight, egui::Button::new("Choose file..."))
                    .clicked()
                {
                    let dialog = rfd::FileDialog::new()
                        .add_filter("Images", &["png", "jpg", "jpeg", "gif", "webp"]);
                    if let Some(path) = dialog.pick_file() {
                        self.set_pending_file(path);
                    }
                }
                if let Some(path) = &self.pending_file {
                    ui.label(
                        RichText::new(path.display().to_string())
                            .monospace()
                            .color(COLOR_TEXT_SECONDARY),
                    );
                }
            });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                let ready = self.pending_file.is_some() && !self.upload_in_flight;
                if ui.add_enabled(ready, egui::Button::new("Upload")).clicked() {
                    self.start_upload();
                }
                if self.upload_in_flight {
                    ui.spinner();
                    ui.label(RichText::new("Uploading...").color(COLOR_TEXT_MUTED));
                }
            });
        });
    }
}
