use eframe::egui::{self, PointerButton, Rect, Ui};

use super::super::ViewModel;
use super::super::render_utils::screen_to_world;

impl ViewModel {
    pub(in crate::app) fn handle_scheme_zoom(
        &mut self,
        ui: &Ui,
        rect: Rect,
        response: &egui::Response,
    ) {
        if !response.hovered() {
            return;
        }

        let scroll = ui.input(|input| input.raw_scroll_delta.y);
        if scroll.abs() <= f32::EPSILON {
            return;
        }

        let pointer = ui
            .input(|input| input.pointer.hover_pos())
            .unwrap_or_else(|| rect.center());
        let world_before = screen_to_world(rect, self.pan, self.zoom, pointer);

        let zoom_factor = (1.0 + (scroll * 0.0018)).clamp(0.85, 1.15);
        self.zoom = (self.zoom * zoom_factor).clamp(0.2, 5.0);
        self.pan = pointer - rect.center() - (world_before.to_vec2() * self.zoom);
    }

    pub(in crate::app) fn handle_scheme_pan(&mut self, response: &egui::Response) {
        if response.dragged_by(PointerButton::Secondary)
            || response.dragged_by(PointerButton::Middle)
        {
            self.pan += response.drag_delta();
        }
    }

    /// Topmost entity under the pointer: entities are painted in registry
    /// order, so the last hit wins.
    pub(in crate::app) fn hovered_entity(&self, ui: &Ui, rect: Rect) -> Option<usize> {
        let pointer = ui.input(|input| input.pointer.hover_pos())?;
        if !rect.contains(pointer) {
            return None;
        }

        let world = screen_to_world(rect, self.pan, self.zoom, pointer);
        self.facility
            .entities()
            .iter()
            .enumerate()
            .rev()
            .find(|(_, entity)| entity.rect.contains(world))
            .map(|(index, _)| index)
    }

    /// Primary drag moves one entity. Placement invariants are only enforced
    /// at build time; a manual move may overlap on purpose.
    pub(in crate::app) fn handle_entity_drag(
        &mut self,
        response: &egui::Response,
        hovered: Option<usize>,
    ) {
        if response.drag_started_by(PointerButton::Primary) {
            self.drag_target = hovered;
        }

        if response.dragged_by(PointerButton::Primary)
            && let Some(index) = self.drag_target
            && let Some(entity) = self.facility.entities_mut().get_mut(index)
        {
            entity.rect = entity.rect.translate(response.drag_delta() / self.zoom);
        }

        if response.drag_stopped_by(PointerButton::Primary) {
            self.drag_target = None;
        }
    }
}
