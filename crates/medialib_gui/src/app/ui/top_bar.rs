//! Top bar rendering with view switching.

use super::super::*;
use eframe::egui::{self, RichText};

impl MediaLibraryApp {
    pub(crate) fn render_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(RichText::new("Media Library").color(COLOR_ACCENT));
                    ui.add_space(16.0);
                    for (view, label) in [
                        (View::Folders, "Folders"),
                        (View::Search, "Search"),
                        (View::Upload, "Upload"),
                        (View::Rocketium, "Rocketium"),
                    ] {
                        if ui
                            .selectable_label(self.view == view, RichText::new(label))
                            .clicked()
                        {
                            self.view = view;
                        }
                    }
                });
            });
    }
}
