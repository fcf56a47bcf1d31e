//! Reusable UI pieces for the form

use eframe::egui::{self, RichText};

use super::theme::{BG_SECONDARY, TEXT_DIM, TEXT_MUTED};

/// Render a section frame with secondary background
pub fn render_section_frame<R>(
    ui: &mut egui::Ui,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    egui::Frame::NONE
        .fill(BG_SECONDARY)
        .corner_radius(4.0)
        .inner_margin(12.0)
        .show(ui, add_contents)
        .inner
}

/// Bold field caption
pub fn render_heading(ui: &mut egui::Ui, text: &str) {
    ui.label(RichText::new(text).strong().color(TEXT_DIM));
}

/// Wrapped, selectable path text
pub fn render_path_label(ui: &mut egui::Ui, text: &str) {
    ui.add(
        egui::Label::new(RichText::new(text).monospace().small().color(TEXT_MUTED))
            .wrap()
            .selectable(true),
    );
}

/// Caption + path on the left, one button on the right.
/// Returns true when the button was clicked.
pub fn render_path_row(ui: &mut egui::Ui, caption: &str, path_text: &str, button: &str) -> bool {
    let mut clicked = false;
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            render_heading(ui, caption);
            render_path_label(ui, path_text);
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            clicked = ui.button(button).clicked();
        });
    });
    clicked
}
