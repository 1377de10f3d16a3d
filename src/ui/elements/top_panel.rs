// src/ui/elements/top_panel.rs
use bevy::prelude::*;
use bevy_egui::egui;

use crate::document::events::{
    DocumentOperationFeedback, RequestInitiateTextImport, RequestRestoreDefault,
};
use crate::document::resources::DocumentState;
use crate::settings::{self, EditorSettings};
use crate::ui::elements::editor::state::{EditorWindowState, PageScroll};
use crate::ui::shortcut;

// Mock menu strip of the word-processor chrome; only 开始 is "active".
const MENU_LABELS: [&str; 11] = [
    "文件", "开始", "插入", "绘图", "设计", "布局", "引用", "审阅", "视图", "帮助", "表设计",
];

#[allow(clippy::too_many_arguments)]
pub fn show_top_panel(
    ui: &mut egui::Ui,
    state: &mut EditorWindowState,
    doc: &mut DocumentState,
    settings: &mut EditorSettings,
    restore_writer: &mut EventWriter<RequestRestoreDefault>,
    import_writer: &mut EventWriter<RequestInitiateTextImport>,
    feedback_writer: &mut EventWriter<DocumentOperationFeedback>,
) {
    egui::TopBottomPanel::top("document_toolbar").show_inside(ui, |ui| {
        // Title row with the quick-access restore button and the config menu.
        ui.horizontal(|ui| {
            if ui
                .button("⟲ 一键恢复")
                .on_hover_text(format!(
                    "快捷键：{}",
                    shortcut::describe(&settings.restore_shortcut)
                ))
                .clicked()
            {
                restore_writer.write(RequestRestoreDefault);
            }
            ui.separator();
            ui.label("定位导航意见汇总表.doc - 兼容性模式");

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                show_config_menu(ui, state, doc, settings, import_writer, feedback_writer);
            });
        });

        // Mock menu strip.
        ui.horizontal(|ui| {
            for label in MENU_LABELS {
                let _ = ui.selectable_label(label == "开始", label);
            }
        });
        ui.separator();

        // Paging controls.
        ui.horizontal(|ui| {
            if ui.button("◀ 上一页").clicked() && doc.prev_page() && settings.auto_scroll {
                state.pending_scroll = Some(PageScroll::Bottom);
            }
            if ui.button("下一页 ▶").clicked()
                && doc.next_page(settings.rows_per_page)
                && settings.auto_scroll
            {
                state.pending_scroll = Some(PageScroll::Top);
            }
            ui.label(format!(
                "第 {} / {} 页",
                doc.current_page,
                doc.total_pages(settings.rows_per_page)
            ));
        });
        ui.add_space(4.0);
    });
}

fn show_config_menu(
    ui: &mut egui::Ui,
    state: &mut EditorWindowState,
    doc: &mut DocumentState,
    settings: &mut EditorSettings,
    import_writer: &mut EventWriter<RequestInitiateTextImport>,
    feedback_writer: &mut EventWriter<DocumentOperationFeedback>,
) {
    ui.menu_button("⚙ 配置", |ui| {
        if ui.button("保存当前界面为默认").clicked() {
            state.show_save_default_popup = true;
            ui.close_menu();
        }
        if ui.button("设置一键恢复快捷键").clicked() {
            state.shortcut_input = settings.restore_shortcut.clone();
            state.show_shortcut_popup = true;
            ui.close_menu();
        }
        if ui.button("设置每页行数").clicked() {
            state.rows_per_page_input = settings.rows_per_page.to_string();
            state.show_rows_per_page_popup = true;
            ui.close_menu();
        }
        if ui.button("跳转到指定页").clicked() {
            state.page_jump_input = doc.current_page.to_string();
            state.show_page_jump_popup = true;
            ui.close_menu();
        }
        ui.separator();

        let auto_scroll_label = if settings.auto_scroll {
            "翻页自动滚动：开启"
        } else {
            "翻页自动滚动：关闭"
        };
        if ui.button(auto_scroll_label).clicked() {
            settings.auto_scroll = !settings.auto_scroll;
            if !settings::persist(settings) {
                error!("Failed to persist auto-scroll setting.");
                feedback_writer.write(DocumentOperationFeedback {
                    message: "设置已生效，但保存到磁盘失败。".to_string(),
                    is_error: true,
                });
            }
            ui.close_menu();
        }
        ui.separator();

        if ui.button("导入文本文件").clicked() {
            import_writer.write(RequestInitiateTextImport);
            ui.close_menu();
        }
    });
}
