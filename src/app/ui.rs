use super::state::{NotificationKind, Phase};
use super::TextUploader;
use crate::ingest::PathSource;
use eframe::egui::{self, Align2, Color32, RichText};
use rfd::FileDialog;

impl TextUploader {
    pub fn render(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(20.0);
                ui.vertical_centered(|ui| {
                    ui.heading("Upload Your Files");
                    ui.add_space(5.0);
                    ui.label(
                        RichText::new("Seamlessly process and manage your text files")
                            .color(ui.visuals().text_color().gamma_multiply(0.7)),
                    );
                });

                ui.add_space(20.0);
                self.render_drop_zone(ui);

                if self.state.file_content.is_some() {
                    ui.add_space(20.0);
                    self.render_preview(ui);
                }

                ui.add_space(20.0);
            });
        });

        self.render_notification(ctx);
    }

    fn render_drop_zone(&mut self, ui: &mut egui::Ui) {
        let highlight = self.state.is_dragging();
        let stroke = if highlight {
            egui::Stroke::new(2.0, Color32::from_rgb(59, 130, 246))
        } else {
            egui::Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color)
        };

        egui::Frame::none()
            .stroke(stroke)
            .rounding(egui::Rounding::same(8.0))
            .inner_margin(egui::Margin::same(24.0))
            .show(ui, |ui| {
                ui.set_min_height(160.0);
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.add_space(20.0);
                    ui.label(RichText::new("📄").size(32.0));
                    ui.add_space(10.0);
                    ui.label(match self.state.phase() {
                        Phase::Dragging => "Release to drop the file",
                        Phase::Uploading => "Uploading your file...",
                        Phase::Idle | Phase::Loaded => "Drop your file here, or browse",
                    });
                    ui.add_space(5.0);
                    ui.label(
                        RichText::new("Supports .txt files")
                            .color(ui.visuals().text_color().gamma_multiply(0.6)),
                    );
                    ui.add_space(10.0);
                    if ui.button("📁 Browse").clicked() {
                        if let Some(path) = FileDialog::new()
                            .add_filter("Text files", &["txt"])
                            .pick_file()
                        {
                            self.ingest(PathSource::new(path));
                        }
                    }
                    ui.add_space(20.0);
                });
            });
    }

    fn render_preview(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(&self.state.file_name).strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("✖").clicked() {
                        self.reset_file();
                    }
                });
            });
            ui.separator();

            if let Some(content) = &self.state.file_content {
                egui::ScrollArea::vertical()
                    .max_height(300.0)
                    .id_source("file_preview")
                    .show(ui, |ui| {
                        ui.label(RichText::new(content).monospace());
                    });
            }

            ui.add_space(10.0);
            ui.vertical_centered(|ui| {
                let busy = self.state.is_uploading;
                ui.add_enabled_ui(!busy, |ui| {
                    let label = if busy {
                        "⏳ Uploading..."
                    } else {
                        "📤 Upload File"
                    };
                    let button = egui::Button::new(label).min_size(egui::vec2(200.0, 36.0));
                    if ui.add(button).clicked() {
                        self.start_upload();
                    }
                });
            });
        });
    }

    fn render_notification(&mut self, ctx: &egui::Context) {
        let Some(notification) = self.state.notification().cloned() else {
            return;
        };

        let color = match notification.kind {
            NotificationKind::Success => Color32::from_rgb(0, 180, 0),
            NotificationKind::Error => Color32::from_rgb(220, 50, 50),
        };

        egui::Area::new(egui::Id::new("upload_notification"))
            .anchor(Align2::RIGHT_TOP, egui::vec2(-16.0, 16.0))
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.set_max_width(320.0);
                    ui.horizontal(|ui| {
                        ui.colored_label(color, &notification.message);
                        if ui.button("✖").clicked() {
                            self.state.dismiss_notification();
                        }
                    });
                });
            });
    }
}
