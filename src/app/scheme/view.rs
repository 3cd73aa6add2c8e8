use eframe::egui::{
    self, Align2, Color32, FontId, PointerButton, Sense, Stroke, StrokeKind, Ui, vec2,
};

use crate::facility::EntityKind;
use crate::util::format_megawatts;

use super::super::ViewModel;
use super::super::render_utils::{
    TURBINE_ACTIVE, TURBINE_INACTIVE, blend_color, contrast_text_color, draw_background,
    world_rect_to_screen, world_to_screen,
};

const SELECTED_OUTLINE: Color32 = Color32::from_rgb(214, 143, 0);

impl ViewModel {
    pub(in crate::app) fn draw_scheme(&mut self, ui: &mut Ui) {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());
        let painter = ui.painter_at(rect);

        draw_background(&painter, rect, self.pan, self.zoom);

        self.handle_scheme_zoom(ui, rect, &response);
        self.handle_scheme_pan(&response);

        let hovered = self.hovered_entity(ui, rect);
        self.handle_entity_drag(&response, hovered);

        if hovered.is_some() {
            ui.output_mut(|output| {
                output.cursor_icon = egui::CursorIcon::PointingHand;
            });
        }

        let pending_selection = if response.clicked_by(PointerButton::Primary) {
            Some(hovered.and_then(|index| {
                self.facility
                    .entities()
                    .get(index)
                    .map(|entity| entity.name.clone())
            }))
        } else {
            None
        };

        let pan = self.pan;
        let zoom = self.zoom;

        for (index, entity) in self.facility.entities().iter().enumerate() {
            let screen_rect = world_rect_to_screen(rect, pan, zoom, entity.rect);
            if !screen_rect.intersects(rect) {
                continue;
            }

            let is_selected = self.selected.as_deref() == Some(entity.name.as_str());
            let is_hovered = hovered == Some(index);

            let fill = if is_hovered {
                blend_color(entity.color, Color32::WHITE, 0.25)
            } else {
                entity.color
            };
            painter.rect_filled(screen_rect, 2.0, fill);

            let outline = if is_selected {
                Stroke::new(2.5, SELECTED_OUTLINE)
            } else {
                Stroke::new(1.0, Color32::BLACK)
            };
            painter.rect_stroke(screen_rect, 2.0, outline, StrokeKind::Middle);

            if screen_rect.width() >= 34.0 {
                painter.text(
                    screen_rect.center(),
                    Align2::CENTER_CENTER,
                    &entity.name,
                    FontId::proportional((11.0 * zoom).clamp(9.0, 16.0)),
                    contrast_text_color(fill),
                );
            }

            if let EntityKind::Station { turbines } = &entity.kind {
                for (slot, turbine) in turbines.iter().enumerate() {
                    let column = (slot % 3) as f32;
                    let row = (slot / 3) as f32;
                    let world_center =
                        entity.rect.center() + vec2(-35.0 + column * 30.0, 45.0 + row * 30.0);
                    let center = world_to_screen(rect, pan, zoom, world_center);
                    let radius = 5.0 * zoom;

                    let state_color = if turbine.active {
                        TURBINE_ACTIVE
                    } else {
                        TURBINE_INACTIVE
                    };
                    painter.circle_filled(center, radius, state_color);
                    painter.circle_stroke(center, radius, Stroke::new(1.0, Color32::BLACK));

                    if zoom >= 0.8 {
                        painter.text(
                            center + vec2(radius + 4.0, 0.0),
                            Align2::LEFT_CENTER,
                            format!("Турбина {}", turbine.id),
                            FontId::proportional(10.0),
                            Color32::from_gray(70),
                        );
                    }
                }
            }
        }

        if let Some(index) = hovered
            && let Some(entity) = self.facility.entities().get(index)
        {
            let power_text = match entity.generation_mw() {
                Some(generation) => format!("выработка {}", format_megawatts(generation)),
                None => format!("потребление {}", format_megawatts(entity.power_mw)),
            };
            let readout = format!(
                "{}  |  {}  |  {} км от ГТЭС",
                entity.name, power_text, entity.distance_km
            );
            painter.text(
                rect.left_top() + vec2(10.0, 10.0),
                Align2::LEFT_TOP,
                readout,
                FontId::proportional(13.0),
                Color32::from_gray(40),
            );
        }

        if let Some(selected) = pending_selection {
            self.set_selected(selected);
        }
    }
}
