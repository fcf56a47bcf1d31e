//! eframe::App implementation for LauncherApp
//!
//! One window, top to bottom: source folder, name + destination, actions,
//! status log.

use eframe::egui::{self, RichText};

use super::app::{LauncherApp, StatusTone};
use super::helpers::{render_heading, render_path_row, render_section_frame};
use super::theme::{
    ACCENT_CYAN, ACCENT_GREEN, ACCENT_RED, ACCENT_YELLOW, TEXT_MUTED, TEXT_PRIMARY, apply_theme,
};
use crate::domain::Stage;
use crate::platform;

impl eframe::App for LauncherApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        apply_theme(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label(
                RichText::new("Create “Open Terminal at …” App")
                    .heading()
                    .strong()
                    .color(TEXT_PRIMARY),
            );
            ui.add_space(12.0);

            self.render_source_section(ui);
            ui.add_space(12.0);
            self.render_helper_section(ui);
            ui.add_space(12.0);
            self.render_actions(ui);

            ui.add_space(8.0);
            ui.separator();
            self.render_status(ui);
        });
    }
}

impl LauncherApp {
    fn render_source_section(&mut self, ui: &mut egui::Ui) {
        let source_text = self
            .form
            .source
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "None selected".to_string());

        let pick = render_section_frame(ui, |ui| {
            render_path_row(ui, "Folder to open in Terminal:", &source_text, "Pick Folder")
        });
        if pick {
            self.pick_folder();
        }
    }

    fn render_helper_section(&mut self, ui: &mut egui::Ui) {
        let destination_text = self.form.destination.display().to_string();
        let sandboxed = self.destination_is_sandboxed();
        let mut change = false;
        let mut quick_pick = None;

        render_section_frame(ui, |ui| {
            render_heading(ui, "Helper App Name:");
            ui.add(
                egui::TextEdit::singleline(&mut self.form.name)
                    .hint_text("Open Terminal at MyProject")
                    .font(egui::TextStyle::Monospace)
                    .text_color(TEXT_PRIMARY)
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(8.0);

            change = render_path_row(ui, "Destination:", &destination_text, "Change…");

            if sandboxed {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(
                        "Warning: You’re saving inside the app’s sandbox. Choose “~/Applications” \
                         (your user Applications), “~/Downloads”, or “/Users/Shared” via Change… → Go to Folder.",
                    )
                    .small()
                    .color(ACCENT_YELLOW),
                );
                ui.horizontal(|ui| {
                    for (label, path) in platform::quick_destinations() {
                        if ui.button(label).clicked() {
                            quick_pick = Some(path);
                        }
                    }
                });
            }
        });

        if change {
            self.pick_destination();
        }
        if let Some(path) = quick_pick {
            self.use_destination(path);
        }
    }

    fn render_actions(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let create = ui.add_enabled(
                self.form.can_create(),
                egui::Button::new(RichText::new("Create App").strong().color(ACCENT_GREEN)),
            );
            if create.clicked() {
                self.create_helper();
            }

            if ui.button("Reveal Destination").clicked() {
                self.reveal_destination();
            }

            if let Some(stage) = self.last_stage.filter(|s| *s != Stage::Idle) {
                ui.label(
                    RichText::new(format!("stopped while {}", stage))
                        .small()
                        .color(TEXT_MUTED),
                );
            }
        });
    }

    fn render_status(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            render_heading(ui, "Status");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Copy").clicked() {
                    ui.ctx().copy_text(self.status.clone());
                }
                if ui
                    .button(RichText::new("Open Privacy & Security").color(ACCENT_CYAN))
                    .clicked()
                {
                    self.open_privacy_security();
                }
            });
        });

        let color = match self.status_tone {
            StatusTone::Normal => TEXT_PRIMARY,
            StatusTone::Notice => ACCENT_YELLOW,
            StatusTone::Error => ACCENT_RED,
        };

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.add(
                    egui::TextEdit::multiline(&mut self.status)
                        .font(egui::TextStyle::Monospace)
                        .text_color(color)
                        .desired_rows(8)
                        .desired_width(f32::INFINITY),
                );
            });
    }
}
