use eframe::egui::{self, Color32, RichText, Ui};
use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use tracing::{error, info};

use crate::facility::save_snapshot;
use crate::util::format_megawatts;

use super::super::{SaveFeedback, ViewModel};

const BALANCE_POSITIVE: Color32 = Color32::from_rgb(35, 120, 50);
const BALANCE_NEGATIVE: Color32 = Color32::from_rgb(180, 40, 40);

fn fuzzy_match_score(matcher: &SkimMatcherV2, text: &str, query: &str) -> Option<i64> {
    matcher
        .fuzzy_match(text, query)
        .or_else(|| matcher.fuzzy_match(&text.to_lowercase(), &query.to_lowercase()))
}

impl ViewModel {
    pub(in crate::app) fn draw_controls(&mut self, ui: &mut Ui) {
        ui.heading("Объекты");
        ui.separator();
        ui.add_space(4.0);

        ui.label("Поиск по названию");
        ui.text_edit_singleline(&mut self.search)
            .on_hover_text("Отфильтровать список объектов.");
        ui.add_space(6.0);

        self.draw_balance_summary(ui);
        ui.add_space(6.0);

        if ui.button("Сохранить параметры").clicked() {
            self.save_parameters();
        }
        if let Some(feedback) = &self.save_feedback {
            let color = if feedback.is_error {
                BALANCE_NEGATIVE
            } else {
                BALANCE_POSITIVE
            };
            ui.colored_label(color, &feedback.message);
        }

        ui.add_space(6.0);
        ui.separator();

        let matcher = SkimMatcherV2::default();
        let query = self.search.trim().to_owned();
        let mut pending_selection = None;

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for entity in self.facility.entities() {
                    if !query.is_empty()
                        && fuzzy_match_score(&matcher, &entity.name, &query).is_none()
                    {
                        continue;
                    }

                    let is_selected = self.selected.as_deref() == Some(entity.name.as_str());
                    let label = if entity.connected() {
                        entity.name.clone()
                    } else {
                        format!("{} (откл.)", entity.name)
                    };

                    if ui.selectable_label(is_selected, label).clicked() {
                        pending_selection = Some(entity.name.clone());
                    }
                }
            });

        if let Some(name) = pending_selection {
            self.set_selected(Some(name));
        }
    }

    fn draw_balance_summary(&self, ui: &mut Ui) {
        ui.group(|ui| {
            ui.label(RichText::new("Энергетический баланс").strong());
            ui.label(format!(
                "Выработка: {}",
                format_megawatts(self.summary.generation_mw)
            ));
            ui.label(format!(
                "Потребление: {}",
                format_megawatts(self.summary.consumption_mw)
            ));

            let balance = self.summary.balance_mw;
            let color = if balance >= 0.0 {
                BALANCE_POSITIVE
            } else {
                BALANCE_NEGATIVE
            };
            ui.colored_label(color, format!("Баланс: {}", format_megawatts(balance)));
        });
    }

    fn save_parameters(&mut self) {
        self.save_feedback = Some(match save_snapshot(&self.facility, &self.state_path) {
            Ok(()) => {
                info!(path = %self.state_path.display(), "parameters saved");
                SaveFeedback {
                    message: format!("Параметры сохранены в {}", self.state_path.display()),
                    is_error: false,
                }
            }
            Err(error) => {
                error!(path = %self.state_path.display(), "saving parameters failed: {error:#}");
                SaveFeedback {
                    message: format!("Не удалось сохранить параметры: {error:#}"),
                    is_error: true,
                }
            }
        });
    }
}
