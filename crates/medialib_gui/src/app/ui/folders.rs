//! Folder browsing surface: breadcrumb trail, sub-folders, and the asset grid.

use super::super::*;
use eframe::egui::{self, RichText};
use medialib_core::models::{Asset, Folder};

impl MediaLibraryApp {
    pub(crate) fn render_folders(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_breadcrumbs(ui);
            ui.separator();

            if self.browse_loading && self.folders.is_empty() && self.assets.is_empty() {
                ui.add_space(24.0);
                ui.label(RichText::new("Loading...").color(COLOR_TEXT_MUTED));
                return;
            }

            let mut pending_folder: Option<Folder> = None;
            let mut pending_asset: Option<Asset> = None;

            if !self.folders.is_empty() {
                ui.label(RichText::new("Folders").small().color(COLOR_TEXT_MUTED));
                ui.horizontal_wrapped(|ui| {
                    for folder in &self.folders {
                        let response = ui.button(RichText::new(format!("📁 {}", folder.name)));
                        let response = if folder.description.is_empty() {
                            response
                        } else {
                            response.on_hover_text(&folder.description)
                        };
                        if response.clicked() {
                            pending_folder = Some(folder.clone());
                        }
                    }
                });
                ui.add_space(8.0);
            }

            ui.label(
                RichText::new(format!("Assets ({})", self.assets.len()))
                    .small()
                    .color(COLOR_TEXT_MUTED),
            );
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    ui.horizontal_wrapped(|ui| {
                        for asset in &self.assets {
                            if asset_tile(ui, asset, self.selected_asset_id() == Some(&asset.id))
                                .clicked()
                            {
                                pending_asset = Some(asset.clone());
                            }
                        }
                    });
                    if !self.browse_loading && self.folders.is_empty() && self.assets.is_empty() {
                        ui.label(
                            RichText::new("This folder is empty.").color(COLOR_TEXT_SECONDARY),
                        );
                    }
                });

            if let Some(folder) = pending_folder {
                self.open_folder(folder);
            }
            if let Some(asset) = pending_asset {
                self.select_asset(asset);
            }
        });
    }

    fn render_breadcrumbs(&mut self, ui: &mut egui::Ui) {
        let mut pending_depth: Option<usize> = None;
        ui.horizontal(|ui| {
            if ui
                .selectable_label(self.folder_trail.is_empty(), RichText::new("Library"))
                .clicked()
            {
                pending_depth = Some(0);
            }
            for (idx, folder) in self.folder_trail.iter().enumerate() {
                ui.label(RichText::new("›").color(COLOR_TEXT_MUTED));
                let is_current = idx + 1 == self.folder_trail.len();
                if ui
                    .selectable_label(is_current, RichText::new(&folder.name))
                    .clicked()
                {
                    pending_depth = Some(idx + 1);
                }
            }
        });
        if let Some(depth) = pending_depth {
            self.navigate_to_depth(depth);
        }
    }

    pub(super) fn selected_asset_id(&self) -> Option<&String> {
        self.sync.asset().map(|asset| &asset.id)
    }
}

/// One grid tile: thumbnail plus truncated name. Returns the click response
/// for the whole tile.
pub(super) fn asset_tile(ui: &mut egui::Ui, asset: &Asset, selected: bool) -> egui::Response {
    let frame = egui::Frame::group(ui.style())
        .fill(if selected {
            COLOR_BG_TERTIARY
        } else {
            COLOR_BG_SECONDARY
        })
        .stroke(egui::Stroke::new(
            1.0,
            if selected { COLOR_ACCENT } else { COLOR_BORDER },
        ));
    let inner = frame.show(ui, |ui| {
        ui.set_width(THUMBNAIL_SIZE);
        ui.vertical(|ui| {
            ui.add(
                egui::Image::new(asset.url.as_str())
                    .fit_to_exact_size(egui::vec2(THUMBNAIL_SIZE, THUMBNAIL_SIZE))
                    .show_loading_spinner(true),
            );
            ui.add(
                egui::Label::new(
                    RichText::new(&asset.name)
                        .small()
                        .color(COLOR_TEXT_SECONDARY),
                )
                .truncate(),
            );
        });
    });
    inner.response.interact(egui::Sense::click())
}
