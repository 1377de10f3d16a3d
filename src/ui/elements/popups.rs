// src/ui/elements/popups.rs
use bevy::prelude::*;
use bevy_egui::egui;

use crate::document::events::{DocumentOperationFeedback, RequestSaveAsDefault};
use crate::document::resources::DocumentState;
use crate::settings::{self, normalize_shortcut, EditorSettings};
use crate::ui::elements::editor::state::{EditorWindowState, PageScroll};
use crate::ui::shortcut;

/// Displays the restore-shortcut configuration popup. Any non-empty input is
/// accepted and stored normalized; an unknown key name simply never fires.
pub fn show_shortcut_popup(
    ctx: &egui::Context,
    state: &mut EditorWindowState,
    settings: &mut EditorSettings,
    feedback_writer: &mut EventWriter<DocumentOperationFeedback>,
) {
    let mut popup_open = state.show_shortcut_popup;
    let mut trigger_save = false;

    if state.show_shortcut_popup {
        egui::Window::new("设置一键恢复快捷键")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut popup_open)
            .show(ctx, |ui| {
                ui.label("请输入按键（支持 F1-F12 或 单个字母）：");
                let response = ui.add(
                    egui::TextEdit::singleline(&mut state.shortcut_input)
                        .desired_width(150.0)
                        .lock_focus(true),
                );
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    trigger_save = true;
                }
                ui.small("规则：输入单个字母（如 q）时实际快捷键为 Alt + 字母；输入功能键（如 F9、Escape）则直接生效。");
                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("保存设置").clicked() {
                        trigger_save = true;
                    }
                    if ui.button("取消").clicked() {
                        state.show_shortcut_popup = false;
                    }
                });
            });

        if trigger_save && !state.shortcut_input.trim().is_empty() {
            settings.restore_shortcut = normalize_shortcut(&state.shortcut_input);
            if settings::persist(settings) {
                feedback_writer.write(DocumentOperationFeedback {
                    message: format!(
                        "一键恢复快捷键已设置为 {}。",
                        shortcut::describe(&settings.restore_shortcut)
                    ),
                    is_error: false,
                });
            } else {
                error!("Failed to persist restore shortcut.");
                feedback_writer.write(DocumentOperationFeedback {
                    message: "快捷键已生效，但保存到磁盘失败。".to_string(),
                    is_error: true,
                });
            }
            state.show_shortcut_popup = false;
        }

        state.show_shortcut_popup = state.show_shortcut_popup && popup_open;
        if !state.show_shortcut_popup {
            state.shortcut_input.clear();
        }
    }
}

/// Displays the rows-per-page popup. Non-numeric or non-positive input is
/// rejected with feedback and the dialog stays open for correction; a valid
/// change resets pagination to page 1.
pub fn show_rows_per_page_popup(
    ctx: &egui::Context,
    state: &mut EditorWindowState,
    settings: &mut EditorSettings,
    doc: &mut DocumentState,
    feedback_writer: &mut EventWriter<DocumentOperationFeedback>,
) {
    let mut popup_open = state.show_rows_per_page_popup;
    let mut trigger_apply = false;

    if state.show_rows_per_page_popup {
        egui::Window::new("设置每页行数")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut popup_open)
            .show(ctx, |ui| {
                ui.label("每页显示的行数（正整数）：");
                let response = ui.add(
                    egui::TextEdit::singleline(&mut state.rows_per_page_input)
                        .desired_width(80.0)
                        .lock_focus(true),
                );
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    trigger_apply = true;
                }
                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("保存").clicked() {
                        trigger_apply = true;
                    }
                    if ui.button("取消").clicked() {
                        state.show_rows_per_page_popup = false;
                    }
                });
            });

        if trigger_apply {
            match state.rows_per_page_input.trim().parse::<usize>() {
                Ok(rows) if rows >= 1 => {
                    if rows != settings.rows_per_page {
                        settings.rows_per_page = rows;
                        doc.reset_page();
                        if !settings::persist(settings) {
                            error!("Failed to persist rows-per-page setting.");
                            feedback_writer.write(DocumentOperationFeedback {
                                message: "设置已生效，但保存到磁盘失败。".to_string(),
                                is_error: true,
                            });
                        }
                    }
                    feedback_writer.write(DocumentOperationFeedback {
                        message: format!("每页行数已设置为 {}。", rows),
                        is_error: false,
                    });
                    state.show_rows_per_page_popup = false;
                }
                _ => {
                    warn!(
                        "Rejected rows-per-page input '{}'.",
                        state.rows_per_page_input
                    );
                    feedback_writer.write(DocumentOperationFeedback {
                        message: "每页行数需为正整数。".to_string(),
                        is_error: true,
                    });
                }
            }
        }

        state.show_rows_per_page_popup = state.show_rows_per_page_popup && popup_open;
        if !state.show_rows_per_page_popup {
            state.rows_per_page_input.clear();
        }
    }
}

/// Displays the page-jump popup. Out-of-range input is rejected with a
/// message naming the valid range and no partial effect on pagination.
pub fn show_page_jump_popup(
    ctx: &egui::Context,
    state: &mut EditorWindowState,
    doc: &mut DocumentState,
    settings: &EditorSettings,
    feedback_writer: &mut EventWriter<DocumentOperationFeedback>,
) {
    let mut popup_open = state.show_page_jump_popup;
    let mut trigger_jump = false;

    if state.show_page_jump_popup {
        egui::Window::new("跳转到指定页")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut popup_open)
            .show(ctx, |ui| {
                ui.label(format!(
                    "页码（1-{}）：",
                    doc.total_pages(settings.rows_per_page)
                ));
                let response = ui.add(
                    egui::TextEdit::singleline(&mut state.page_jump_input)
                        .desired_width(80.0)
                        .lock_focus(true),
                );
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    trigger_jump = true;
                }
                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("跳转").clicked() {
                        trigger_jump = true;
                    }
                    if ui.button("取消").clicked() {
                        state.show_page_jump_popup = false;
                    }
                });
            });

        if trigger_jump {
            let before = doc.current_page;
            match state.page_jump_input.trim().parse::<usize>() {
                Ok(page) => match doc.jump_to_page(page, settings.rows_per_page) {
                    Ok(()) => {
                        if settings.auto_scroll && page != before {
                            state.pending_scroll = Some(if page > before {
                                PageScroll::Top
                            } else {
                                PageScroll::Bottom
                            });
                        }
                        state.show_page_jump_popup = false;
                    }
                    Err(e) => {
                        warn!("Rejected page jump to {}: {}", page, e);
                        feedback_writer.write(DocumentOperationFeedback {
                            message: e.to_string(),
                            is_error: true,
                        });
                    }
                },
                Err(_) => {
                    feedback_writer.write(DocumentOperationFeedback {
                        message: format!(
                            "请输入 1-{} 之间的页码。",
                            doc.total_pages(settings.rows_per_page)
                        ),
                        is_error: true,
                    });
                }
            }
        }

        state.show_page_jump_popup = state.show_page_jump_popup && popup_open;
        if !state.show_page_jump_popup {
            state.page_jump_input.clear();
        }
    }
}

/// Confirmation before adopting the live view as the default snapshot.
pub fn show_save_default_popup(
    ctx: &egui::Context,
    state: &mut EditorWindowState,
    save_default_writer: &mut EventWriter<RequestSaveAsDefault>,
) {
    let mut popup_open = state.show_save_default_popup;

    if state.show_save_default_popup {
        egui::Window::new("保存为默认工作状态")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut popup_open)
            .show(ctx, |ui| {
                ui.label("是否将当前文档视图保存为“默认工作状态”？");
                ui.small("按恢复键时将瞬间回到此状态。");
                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("确认保存").clicked() {
                        save_default_writer.write(RequestSaveAsDefault);
                        state.show_save_default_popup = false;
                    }
                    if ui.button("取消").clicked() {
                        state.show_save_default_popup = false;
                    }
                });
            });

        state.show_save_default_popup = state.show_save_default_popup && popup_open;
    }
}
