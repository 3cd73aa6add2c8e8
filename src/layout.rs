use eframe::egui::{Pos2, Rect, Vec2, pos2};

/// Probing rules for one class of schematic boxes. Distances are kilometres,
/// everything else is canvas units.
pub struct PlacementRules {
    pub distance_scale: f32,
    pub cap_radius: f32,
    pub far_distance: f32,
    pub far_radius: f32,
    pub radius_step: f32,
    pub angle_step_deg: f32,
}

/// Consumer buildings: coarse radius growth at a fixed angle.
pub const BUILDING_RULES: PlacementRules = PlacementRules {
    distance_scale: 50.0,
    cap_radius: 250.0,
    far_distance: 50.0,
    far_radius: 300.0,
    radius_step: 80.0,
    angle_step_deg: 0.0,
};

/// Well clusters: fine radius growth combined with an angular nudge.
pub const WELL_RULES: PlacementRules = PlacementRules {
    distance_scale: 20.0,
    cap_radius: 250.0,
    far_distance: 15.0,
    far_radius: 300.0,
    radius_step: 10.0,
    angle_step_deg: 5.0,
};

impl PlacementRules {
    pub fn initial_radius(&self, distance: f32) -> f32 {
        if distance < self.far_distance {
            (distance * self.distance_scale).min(self.cap_radius)
        } else {
            self.far_radius
        }
    }
}

pub fn even_angle_deg(index: usize, count: usize) -> f32 {
    if count == 0 {
        return 0.0;
    }
    index as f32 * (360.0 / count as f32)
}

pub fn golden_angle_deg(index: u32) -> f32 {
    (index as f32 * 137.5) % 360.0
}

/// Strict separating-axis test: boxes that merely share an edge do not
/// overlap.
pub fn boxes_overlap(a: Rect, b: Rect) -> bool {
    a.min.x < b.max.x && b.min.x < a.max.x && a.min.y < b.max.y && b.min.y < a.max.y
}

fn overlaps_any(candidate: Rect, placed: &[Rect]) -> bool {
    placed.iter().any(|rect| boxes_overlap(candidate, *rect))
}

fn probe(center: Pos2, size: Vec2, radius: f32, angle_deg: f32) -> Rect {
    let angle = angle_deg.to_radians();
    let top_left = pos2(
        center.x + radius * angle.cos() - size.x * 0.5,
        center.y + radius * angle.sin() - size.y * 0.5,
    );
    Rect::from_min_size(top_left, size)
}

/// Greedy radial probing: start at the distance-derived radius and the given
/// angle, and keep growing until the candidate clears every placed box. The
/// radius strictly increases each retry, so the loop always escapes a finite
/// placed set.
pub fn place_box(
    center: Pos2,
    size: Vec2,
    distance: f32,
    start_angle_deg: f32,
    rules: &PlacementRules,
    placed: &[Rect],
) -> Rect {
    let mut radius = rules.initial_radius(distance);
    let mut angle = start_angle_deg;

    loop {
        let candidate = probe(center, size, radius, angle);
        if !overlaps_any(candidate, placed) {
            return candidate;
        }

        radius += rules.radius_step;
        angle = (angle + rules.angle_step_deg) % 360.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::vec2;

    #[test]
    fn initial_radius_scales_then_caps_then_pins() {
        assert_eq!(BUILDING_RULES.initial_radius(0.3), 15.0);
        assert_eq!(BUILDING_RULES.initial_radius(4.0), 200.0);
        assert_eq!(BUILDING_RULES.initial_radius(10.0), 250.0);
        assert_eq!(BUILDING_RULES.initial_radius(100.0), 300.0);

        assert_eq!(WELL_RULES.initial_radius(1.0), 20.0);
        assert_eq!(WELL_RULES.initial_radius(14.0), 250.0);
        assert_eq!(WELL_RULES.initial_radius(15.0), 300.0);
    }

    #[test]
    fn even_and_golden_angles() {
        assert_eq!(even_angle_deg(0, 6), 0.0);
        assert_eq!(even_angle_deg(2, 6), 120.0);
        assert_eq!(even_angle_deg(5, 6), 300.0);

        assert_eq!(golden_angle_deg(1), 137.5);
        assert_eq!(golden_angle_deg(2), 275.0);
        assert_eq!(golden_angle_deg(3), 52.5);
    }

    #[test]
    fn shared_edges_are_not_overlap() {
        let a = Rect::from_min_size(pos2(0.0, 0.0), vec2(10.0, 10.0));
        let b = Rect::from_min_size(pos2(10.0, 0.0), vec2(10.0, 10.0));
        let c = Rect::from_min_size(pos2(0.0, 10.0), vec2(10.0, 10.0));
        let d = Rect::from_min_size(pos2(9.0, 9.0), vec2(10.0, 10.0));

        assert!(!boxes_overlap(a, b));
        assert!(!boxes_overlap(a, c));
        assert!(boxes_overlap(a, d));
        assert!(boxes_overlap(d, a));
    }

    #[test]
    fn placed_boxes_never_overlap_each_other() {
        let center = Pos2::ZERO;
        let size = vec2(60.0, 30.0);
        let mut placed = vec![Rect::from_center_size(center, vec2(100.0, 60.0))];

        for index in 1..=40u32 {
            let rect = place_box(
                center,
                size,
                0.0,
                golden_angle_deg(index),
                &WELL_RULES,
                &placed,
            );
            placed.push(rect);
        }

        for i in 0..placed.len() {
            for j in (i + 1)..placed.len() {
                assert!(
                    !boxes_overlap(placed[i], placed[j]),
                    "boxes {i} and {j} overlap: {:?} vs {:?}",
                    placed[i],
                    placed[j]
                );
            }
        }
    }

    #[test]
    fn placement_is_deterministic() {
        let center = pos2(350.0, 350.0);
        let size = vec2(100.0, 60.0);

        let run = || {
            let mut placed = Vec::new();
            for index in 0..6 {
                let rect = place_box(
                    center,
                    size,
                    0.5,
                    even_angle_deg(index, 6),
                    &BUILDING_RULES,
                    &placed,
                );
                placed.push(rect);
            }
            placed
        };

        assert_eq!(run(), run());
    }

    #[test]
    fn zero_distance_is_pushed_off_an_occupied_center() {
        let center = Pos2::ZERO;
        let size = vec2(100.0, 60.0);
        let placed = vec![Rect::from_center_size(center, size)];

        let rect = place_box(center, size, 0.0, 0.0, &BUILDING_RULES, &placed);
        assert!(!boxes_overlap(rect, placed[0]));
    }
}
