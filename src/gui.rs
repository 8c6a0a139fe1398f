//! The desktop dashboard.
//!
//! Layout, top to bottom: dataset cards, the category chart, the category
//! selector, the Top-10 table and the directory table (each with a download
//! button), and a footer. All state lives in [`model::DashboardModel`]; this
//! module only renders it and forwards user actions.

use crate::config::{self, DashboardSettings};
use crate::export::{ExportFormat, SAVE_DIALOG_TITLE};
use crate::podcasts::PodcastTable;
use crate::theme;
use eframe::egui;
use egui_phosphor::regular as icons;
use rfd::FileDialog;
use std::path::PathBuf;
use std::sync::Arc;

pub mod chart;
pub mod model;
pub mod tables;

pub use model::DashboardModel;

pub const APP_TITLE: &str = "Apple Podcasts Dashboard";
const DATA_SOURCE_URL: &str = "https://www.kaggle.com/datasets/thoughtvector/podcastreviews";
const LINKEDIN_URL: &str = "https://www.linkedin.com/in/tatevik-khachatryan-/";
const GITHUB_URL: &str = "https://github.com/TatKhachatryan/Apple-Podcasts-Dashboard";

#[derive(Clone, Copy)]
enum ExportTarget {
    Top,
    Directory,
}

pub struct DashboardApp {
    pub model: DashboardModel,
    pub settings: DashboardSettings,
    pub status: String,
}

impl DashboardApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        table: Arc<PodcastTable>,
        settings: DashboardSettings,
    ) -> Self {
        theme::apply_dashboard_theme(&cc.egui_ctx);
        Self {
            model: DashboardModel::new(table, &settings),
            settings,
            status: String::new(),
        }
    }

    fn render_cards(&self, ui: &mut egui::Ui) {
        ui.columns(2, |columns| {
            if let [left, right] = columns {
                theme::card_frame(left).show(left, |ui| {
                    ui.set_width(ui.available_width());
                    ui.strong(format!("Data Source: {DATA_SOURCE_URL}"));
                    ui.separator();
                    ui.label(format!(
                        "This data contains {} podcasts hosted on Apple Podcasts.",
                        self.model.table().len()
                    ));
                });
                theme::card_frame(right).show(right, |ui| {
                    ui.set_width(ui.available_width());
                    ui.strong("Podcast Categories.");
                    ui.separator();
                    ui.label(format!(
                        "There are {} main categories in data. The proportion is shown below.",
                        self.model.counts.len()
                    ));
                });
            }
        });
    }

    fn render_selector(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Select a category:");
            let mut chosen = None;
            egui::ComboBox::from_id_salt("category_selector")
                .selected_text(self.model.selected.as_str())
                .width(260.0)
                .show_ui(ui, |ui| {
                    for category in &self.model.categories {
                        let is_selected = *category == self.model.selected;
                        if ui.selectable_label(is_selected, category.as_str()).clicked() && !is_selected {
                            chosen = Some(category.clone());
                        }
                    }
                });
            if let Some(category) = chosen {
                self.model.select_category(&category);
                self.persist_selection();
            }
        });
    }

    fn persist_selection(&mut self) {
        if !self.model.remember_selection(&mut self.settings) {
            return;
        }
        if let Err(e) = config::save_settings(&self.settings) {
            tracing::warn!("Could not save selected category: {e}");
        }
    }

    fn render_download_button(&mut self, ui: &mut egui::Ui, label: &str, target: ExportTarget) {
        ui.vertical_centered(|ui| {
            ui.add_space(theme::SPACING_SMALL);
            if ui
                .button(format!("{} {label}", icons::DOWNLOAD_SIMPLE))
                .clicked()
            {
                self.start_export(target);
            }
        });
    }

    fn start_export(&mut self, target: ExportTarget) {
        let file_name = match target {
            ExportTarget::Top => crate::export::TOP_FILE_NAME,
            ExportTarget::Directory => crate::export::DIRECTORY_FILE_NAME,
        };
        let dialog = ExportFormat::ALL
            .into_iter()
            .fold(FileDialog::new().set_title(SAVE_DIALOG_TITLE), |dialog, format| {
                dialog.add_filter(format.label(), &[format.extension()])
            });
        let path: Option<PathBuf> = dialog.set_file_name(file_name).save_file();
        let Some(path) = path else { return };

        let result = match target {
            ExportTarget::Top => self.model.export_top(&path),
            ExportTarget::Directory => self.model.export_directory(&path),
        };
        self.status = match result {
            Ok(()) => format!("Saved {}", path.display()),
            Err(e) => {
                tracing::error!("Export to {} failed: {e}", path.display());
                format!("Error: {e}")
            }
        };
    }

    fn render_footer(ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.strong("Thank you for your time. Any feedback is much appreciated. Let's connect!");
            ui.add_space(theme::SPACING_SMALL);
            ui.horizontal(|ui| {
                ui.hyperlink_to("LinkedIn", LINKEDIN_URL);
                ui.hyperlink_to("GitHub", GITHUB_URL);
            });
        });
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("title_bar").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(egui::RichText::new(APP_TITLE).size(28.0).strong());
            });
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            if self.status.starts_with("Error") {
                ui.colored_label(ui.visuals().error_fg_color, self.status.as_str());
            } else {
                ui.label(self.status.as_str());
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    self.render_cards(ui);
                    ui.add_space(theme::SPACING_LARGE);
                    chart::render_category_chart(ui, &self.model.counts);
                    theme::section_rule(ui);

                    self.render_selector(ui);
                    ui.add_space(theme::SPACING_SMALL);
                    ui.vertical_centered(|ui| {
                        ui.strong("The table below shows the Top 10 podcasts for the chosen category:");
                    });
                    ui.add_space(theme::SPACING_SMALL);
                    tables::render_view_table(
                        ui,
                        "top_table",
                        &self.model.top,
                        &mut self.model.top_table,
                        theme::TOP_HEADER_COLOR,
                    );
                    self.render_download_button(ui, "Click to Download Top 10 Table", ExportTarget::Top);
                    theme::section_rule(ui);

                    ui.vertical_centered(|ui| {
                        ui.strong(
                            "The table below shows the directory of podcasts for the chosen category:",
                        );
                    });
                    ui.add_space(theme::SPACING_SMALL);
                    tables::render_view_table(
                        ui,
                        "directory_table",
                        &self.model.directory,
                        &mut self.model.directory_table,
                        theme::DIRECTORY_HEADER_COLOR,
                    );
                    self.render_download_button(
                        ui,
                        "Click to Download Directory Table",
                        ExportTarget::Directory,
                    );
                    theme::section_rule(ui);

                    Self::render_footer(ui);
                    ui.add_space(theme::SPACING_HUGE);
                });
        });
    }
}

/// Opens the dashboard window. Blocks until it is closed.
///
/// # Errors
///
/// Returns error if the native window cannot be created
pub fn run(table: Arc<PodcastTable>, settings: DashboardSettings) -> eframe::Result {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([1200.0, 900.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        native_options,
        Box::new(move |cc| Ok(Box::new(DashboardApp::new(cc, table, settings)))),
    )
}
