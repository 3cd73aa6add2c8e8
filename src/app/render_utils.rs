use eframe::egui::{Color32, Painter, Pos2, Rect, Stroke, Vec2};

pub(super) const TURBINE_ACTIVE: Color32 = Color32::from_rgb(58, 160, 70);
pub(super) const TURBINE_INACTIVE: Color32 = Color32::from_rgb(200, 60, 50);

pub(super) fn world_to_screen(rect: Rect, pan: Vec2, zoom: f32, world: Pos2) -> Pos2 {
    rect.center() + pan + world.to_vec2() * zoom
}

pub(super) fn screen_to_world(rect: Rect, pan: Vec2, zoom: f32, screen: Pos2) -> Pos2 {
    ((screen - rect.center() - pan) / zoom).to_pos2()
}

pub(super) fn world_rect_to_screen(rect: Rect, pan: Vec2, zoom: f32, world: Rect) -> Rect {
    Rect::from_min_size(
        world_to_screen(rect, pan, zoom, world.min),
        world.size() * zoom,
    )
}

pub(super) fn draw_background(painter: &Painter, rect: Rect, pan: Vec2, zoom: f32) {
    painter.rect_filled(rect, 0.0, Color32::WHITE);

    let step = (56.0 * zoom.clamp(0.6, 1.8)).max(20.0);
    let origin = rect.center() + pan;
    let grid_stroke = Stroke::new(1.0, Color32::from_rgba_unmultiplied(150, 160, 170, 60));

    let mut x = origin.x.rem_euclid(step);
    while x < rect.right() {
        painter.line_segment([Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())], grid_stroke);
        x += step;
    }

    let mut y = origin.y.rem_euclid(step);
    while y < rect.bottom() {
        painter.line_segment([Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)], grid_stroke);
        y += step;
    }
}

pub(super) fn blend_color(base: Color32, overlay: Color32, amount: f32) -> Color32 {
    let amount = amount.clamp(0.0, 1.0);
    let inverse = 1.0 - amount;

    Color32::from_rgba_unmultiplied(
        ((base.r() as f32 * inverse) + (overlay.r() as f32 * amount)) as u8,
        ((base.g() as f32 * inverse) + (overlay.g() as f32 * amount)) as u8,
        ((base.b() as f32 * inverse) + (overlay.b() as f32 * amount)) as u8,
        ((base.a() as f32 * inverse) + (overlay.a() as f32 * amount)) as u8,
    )
}

/// Entities can be recolored arbitrarily, so labels pick black or white by
/// the fill's luminance.
pub(super) fn contrast_text_color(fill: Color32) -> Color32 {
    let luma =
        0.299 * fill.r() as f32 + 0.587 * fill.g() as f32 + 0.114 * fill.b() as f32;
    if luma < 128.0 {
        Color32::WHITE
    } else {
        Color32::BLACK
    }
}
