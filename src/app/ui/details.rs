use eframe::egui::{self, Color32, RichText, Sense, Stroke, Ui, vec2};

use crate::facility::EntityKind;
use crate::util::format_megawatts;

use super::super::ViewModel;
use super::super::render_utils::{TURBINE_ACTIVE, TURBINE_INACTIVE};

impl ViewModel {
    pub(in crate::app) fn draw_details(&mut self, ui: &mut Ui) {
        ui.heading("Параметры объекта");
        ui.add_space(6.0);

        let Some(selected_name) = self.selected.clone() else {
            ui.label("Выберите объект на схеме или в списке.");
            return;
        };
        let Some(entity) = self.facility.entity_mut(&selected_name) else {
            ui.label("Объект не найден.");
            return;
        };

        let mut state_changed = false;

        ui.label(RichText::new(format!("Параметры {}", entity.name)).strong());
        ui.add_space(4.0);

        egui::Grid::new("entity_params")
            .num_columns(2)
            .spacing([12.0, 4.0])
            .show(ui, |ui| {
                match entity.generation_mw() {
                    Some(generation) => {
                        ui.label("Генерируемая мощность (МВт):");
                        ui.label(format!("{generation:.1}"));
                    }
                    None => {
                        ui.label("Потребляемая мощность (МВт):");
                        ui.label(format!("{:.1}", entity.power_mw));
                    }
                }
                ui.end_row();

                if entity.heat_gcal_h > 0.0 {
                    ui.label("Нагрузка на отопление (Гкал/ч):");
                    ui.label(format!("{:.2}", entity.heat_gcal_h));
                    ui.end_row();
                }

                ui.label("Расстояние от ГТЭС (км):");
                ui.label(format!("{}", entity.distance_km));
                ui.end_row();

                ui.label("Загрузка (лето/зима):");
                ui.label(format!(
                    "{}% / {}%",
                    entity.summer_load_pct, entity.winter_load_pct
                ));
                ui.end_row();
            });

        ui.add_space(8.0);
        ui.separator();

        match &mut entity.kind {
            EntityKind::Station { turbines } => {
                ui.label(RichText::new("Управление турбинами").strong());
                ui.add_space(4.0);

                for row in turbines.chunks_mut(3) {
                    ui.horizontal(|ui| {
                        for turbine in row {
                            ui.group(|ui| {
                                ui.vertical(|ui| {
                                    ui.label(format!("Турбина {}", turbine.id));
                                    ui.label(format_megawatts(turbine.power_mw));

                                    let action = if turbine.active {
                                        "Выключить"
                                    } else {
                                        "Включить"
                                    };
                                    if ui.button(action).clicked() {
                                        turbine.toggle();
                                        state_changed = true;
                                    }

                                    let (dot, _) =
                                        ui.allocate_exact_size(vec2(16.0, 16.0), Sense::hover());
                                    let state_color = if turbine.active {
                                        TURBINE_ACTIVE
                                    } else {
                                        TURBINE_INACTIVE
                                    };
                                    ui.painter().circle_filled(dot.center(), 6.0, state_color);
                                    ui.painter().circle_stroke(
                                        dot.center(),
                                        6.0,
                                        Stroke::new(1.0, Color32::BLACK),
                                    );
                                });
                            });
                        }
                    });
                }
            }
            EntityKind::Consumer { connected } => {
                ui.label(RichText::new("Состояние объекта").strong());
                ui.add_space(4.0);
                if ui.checkbox(connected, "Подключен к сети").changed() {
                    state_changed = true;
                }
            }
        }

        ui.add_space(8.0);
        ui.separator();
        ui.horizontal(|ui| {
            ui.label("Цвет объекта:");
            ui.color_edit_button_srgba(&mut entity.color);
        });

        if state_changed {
            self.refresh_summary();
        }
    }
}
