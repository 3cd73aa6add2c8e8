use std::path::PathBuf;

use eframe::egui::{self, Align, Context, Layout, Vec2};

use crate::facility::Facility;
use crate::util::format_megawatts;

use super::super::ViewModel;

impl ViewModel {
    pub(in crate::app) fn new(facility: Facility, state_path: PathBuf) -> Self {
        let summary = facility.balance();
        let selected = facility
            .entities()
            .first()
            .map(|entity| entity.name.clone());

        Self {
            facility,
            state_path,
            selected,
            search: String::new(),
            pan: Vec2::ZERO,
            zoom: 1.0,
            drag_target: None,
            save_feedback: None,
            summary,
        }
    }

    pub(in crate::app) fn show(&mut self, ctx: &Context) {
        egui::TopBottomPanel::top("top_bar")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("ЭнергоТек");
                    ui.separator();
                    if let Some(station) = self.facility.station() {
                        ui.label(format!("станция: {}", station.name));
                    }
                    ui.label(format!("объектов: {}", self.facility.entity_count()));
                    ui.label(format!("файл параметров: {}", self.state_path.display()));
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(format!(
                            "Баланс: {}",
                            format_megawatts(self.summary.balance_mw)
                        ));
                    });
                });
            });

        egui::SidePanel::left("objects")
            .resizable(true)
            .default_width(300.0)
            .show(ctx, |ui| self.draw_controls(ui));

        egui::SidePanel::right("details")
            .resizable(true)
            .default_width(380.0)
            .show(ctx, |ui| self.draw_details(ui));

        egui::CentralPanel::default().show(ctx, |ui| self.draw_scheme(ui));
    }

    pub(in crate::app) fn set_selected(&mut self, selected: Option<String>) {
        // Selection may only point at a real object.
        self.selected = selected.filter(|name| self.facility.entity(name).is_some());
    }

    pub(in crate::app) fn refresh_summary(&mut self) {
        self.summary = self.facility.balance();
    }
}
