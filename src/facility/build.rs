use eframe::egui::{Color32, Pos2, Rect, Vec2, vec2};

use crate::layout::{self, BUILDING_RULES, WELL_RULES};
use crate::util::parse_hex_color;

use super::catalog::{
    self, CONSUMERS, STATION_ATTRS, STATION_COLOR, STATION_NAME, StaticAttributes, WELL_COLOR,
    WELL_COUNT,
};
use super::model::{Entity, EntityKind, Facility, TURBINE_COUNT, TURBINE_POWER_MW, Turbine};

pub const SCHEME_CENTER: Pos2 = Pos2::ZERO;
pub const BUILDING_SIZE: Vec2 = vec2(100.0, 60.0);
pub const WELL_SIZE: Vec2 = vec2(60.0, 30.0);

fn entity(name: String, rect: Rect, color: &str, attrs: &StaticAttributes, kind: EntityKind) -> Entity {
    Entity {
        name,
        rect,
        color: parse_hex_color(color).unwrap_or(Color32::LIGHT_GRAY),
        power_mw: attrs.power_mw,
        heat_gcal_h: attrs.heat_gcal_h,
        distance_km: attrs.distance_km,
        summer_load_pct: attrs.summer_load_pct,
        winter_load_pct: attrs.winter_load_pct,
        kind,
    }
}

/// Builds the whole facility once: the station box on the scheme center,
/// then the primary consumers in declaration order, then the wells in index
/// order. Buildings are placed strictly before wells so the layout is
/// reproducible.
pub fn build_facility() -> Facility {
    let capacity = 1 + CONSUMERS.len() + WELL_COUNT as usize;
    let mut entities = Vec::with_capacity(capacity);
    let mut placed = Vec::with_capacity(capacity);

    let station_rect = Rect::from_center_size(SCHEME_CENTER, BUILDING_SIZE);
    let turbines = (1..=TURBINE_COUNT)
        .map(|id| Turbine {
            id,
            power_mw: TURBINE_POWER_MW,
            active: true,
        })
        .collect();
    let mut station = entity(
        STATION_NAME.to_owned(),
        station_rect,
        STATION_COLOR,
        &STATION_ATTRS,
        EntityKind::Station { turbines },
    );
    // The 114 МВт table figure is the station nameplate; the station itself
    // draws nothing from the grid.
    station.power_mw = 0.0;
    entities.push(station);
    placed.push(station_rect);

    for (index, consumer) in CONSUMERS.iter().enumerate() {
        let rect = layout::place_box(
            SCHEME_CENTER,
            BUILDING_SIZE,
            consumer.attrs.distance_km as f32,
            layout::even_angle_deg(index, CONSUMERS.len()),
            &BUILDING_RULES,
            &placed,
        );
        entities.push(entity(
            consumer.name.to_owned(),
            rect,
            consumer.color,
            &consumer.attrs,
            EntityKind::Consumer { connected: true },
        ));
        placed.push(rect);
    }

    for index in 1..=WELL_COUNT {
        let attrs = catalog::well_attributes(index);
        let rect = layout::place_box(
            SCHEME_CENTER,
            WELL_SIZE,
            attrs.distance_km as f32,
            layout::golden_angle_deg(index),
            &WELL_RULES,
            &placed,
        );
        entities.push(entity(
            catalog::well_name(index),
            rect,
            WELL_COLOR,
            &attrs,
            EntityKind::Consumer { connected: true },
        ));
        placed.push(rect);
    }

    Facility::new(entities)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::boxes_overlap;
    use std::collections::HashSet;

    #[test]
    fn facility_has_every_object() {
        let facility = build_facility();
        assert_eq!(facility.entity_count(), 33);
        assert!(facility.station().is_some());
        assert!(facility.entity("ЦПС").is_some());
        assert!(facility.entity("Куст 26").is_some());
    }

    #[test]
    fn names_are_unique() {
        let facility = build_facility();
        let names: HashSet<&str> = facility
            .entities()
            .iter()
            .map(|entity| entity.name.as_str())
            .collect();
        assert_eq!(names.len(), facility.entity_count());
    }

    #[test]
    fn no_two_placed_boxes_overlap() {
        let facility = build_facility();
        let rects: Vec<Rect> = facility
            .entities()
            .iter()
            .map(|entity| entity.rect)
            .collect();

        for i in 0..rects.len() {
            for j in (i + 1)..rects.len() {
                assert!(
                    !boxes_overlap(rects[i], rects[j]),
                    "{} overlaps {}",
                    facility.entities()[i].name,
                    facility.entities()[j].name
                );
            }
        }
    }

    #[test]
    fn build_is_deterministic() {
        let first = build_facility();
        let second = build_facility();

        for (a, b) in first.entities().iter().zip(second.entities()) {
            assert_eq!(a.name, b.name);
            assert_eq!(a.rect, b.rect);
        }
    }

    #[test]
    fn station_sits_on_the_scheme_center() {
        let facility = build_facility();
        let station = facility.station().unwrap();
        assert_eq!(station.rect.center(), SCHEME_CENTER);
        assert_eq!(station.rect.size(), BUILDING_SIZE);
        assert_eq!(station.power_mw, 0.0);
        assert_eq!(station.generation_mw(), Some(144.0));
    }

    #[test]
    fn initial_balance_matches_the_table() {
        let facility = build_facility();
        let summary = facility.balance();

        let expected_consumption: f64 = facility
            .entities()
            .iter()
            .filter(|entity| entity.generation_mw().is_none())
            .map(|entity| entity.power_mw)
            .sum();

        assert_eq!(summary.generation_mw, 144.0);
        assert_eq!(summary.consumption_mw, expected_consumption);
        assert_eq!(
            summary.balance_mw,
            summary.generation_mw - summary.consumption_mw
        );
    }

    #[test]
    fn disconnecting_a_consumer_removes_its_rating() {
        let mut facility = build_facility();
        let before = facility.balance().consumption_mw;

        let entity = facility.entity_mut("ЦПС").unwrap();
        let EntityKind::Consumer { connected } = &mut entity.kind else {
            unreachable!();
        };
        *connected = false;

        let after = facility.balance().consumption_mw;
        assert!((before - after - 22.0).abs() < 1e-9);

        let entity = facility.entity_mut("ЦПС").unwrap();
        let EntityKind::Consumer { connected } = &mut entity.kind else {
            unreachable!();
        };
        *connected = true;
        assert_eq!(facility.balance().consumption_mw, before);
    }

    #[test]
    fn every_entity_keeps_its_static_attributes() {
        let facility = build_facility();

        let well_9 = facility.entity("Куст 9").unwrap();
        assert_eq!(well_9.power_mw, 0.7 + 9.0 * 0.1);
        assert_eq!(well_9.distance_km, 5.0);
        assert_eq!(well_9.rect.size(), WELL_SIZE);

        let psp = facility.entity("ПСП").unwrap();
        assert_eq!(psp.distance_km, 100.0);
        assert_eq!(psp.rect.size(), BUILDING_SIZE);
    }
}
