// src/ui/elements/editor/status_bar.rs
use bevy_egui::egui;

use crate::document::resources::DocumentState;
use crate::settings::EditorSettings;

/// Bottom status bar: page position, character count, locale label and the
/// auto-scroll indicator.
pub fn show_status_bar(ctx: &egui::Context, doc: &DocumentState, settings: &EditorSettings) {
    egui::TopBottomPanel::bottom("document_status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "第 {} 页，共 {} 页",
                doc.current_page,
                doc.total_pages(settings.rows_per_page)
            ));
            ui.separator();
            ui.label(format!("{} 个字", doc.word_count()));
            ui.separator();
            ui.label("简体中文(中国大陆)");

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(if settings.auto_scroll {
                    "翻页自动滚动：开启"
                } else {
                    "翻页自动滚动：关闭"
                });
                ui.separator();
                ui.label(format!("每页 {} 行", settings.rows_per_page));
            });
        });
    });
}
