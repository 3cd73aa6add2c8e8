use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use eframe::egui::{Rect, pos2};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::util::{color_hex, parse_hex_color};

use super::model::{EntityKind, Facility};

/// Mutable state only: flags, colors, positions. Static attributes always
/// come from the catalog, never from disk.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FacilitySnapshot {
    pub entities: Vec<EntityState>,
    pub turbines: Vec<TurbineState>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EntityState {
    pub name: String,
    pub color: String,
    pub x: f32,
    pub y: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connected: Option<bool>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TurbineState {
    pub id: u32,
    pub active: bool,
}

impl FacilitySnapshot {
    pub fn capture(facility: &Facility) -> Self {
        let mut turbines = Vec::new();
        let entities = facility
            .entities()
            .iter()
            .map(|entity| {
                let connected = match &entity.kind {
                    EntityKind::Station {
                        turbines: station_turbines,
                    } => {
                        turbines.extend(station_turbines.iter().map(|turbine| TurbineState {
                            id: turbine.id,
                            active: turbine.active,
                        }));
                        None
                    }
                    EntityKind::Consumer { connected } => Some(*connected),
                };

                EntityState {
                    name: entity.name.clone(),
                    color: color_hex(entity.color),
                    x: entity.rect.min.x,
                    y: entity.rect.min.y,
                    connected,
                }
            })
            .collect();

        Self { entities, turbines }
    }

    /// Tolerant application: entries that no longer match the facility are
    /// skipped with a warning, and an unparsable color leaves the current
    /// color in place.
    pub fn apply(&self, facility: &mut Facility) {
        for state in &self.entities {
            let Some(entity) = facility.entity_mut(&state.name) else {
                warn!(name = state.name.as_str(), "snapshot names an unknown object, skipping");
                continue;
            };

            entity.rect = Rect::from_min_size(pos2(state.x, state.y), entity.rect.size());
            match parse_hex_color(&state.color) {
                Some(color) => entity.color = color,
                None => warn!(
                    name = state.name.as_str(),
                    color = state.color.as_str(),
                    "snapshot color is not #rrggbb, keeping the current color"
                ),
            }

            if let EntityKind::Consumer { connected } = &mut entity.kind
                && let Some(saved) = state.connected
            {
                *connected = saved;
            }
        }

        let Some(station) = facility.station_mut() else {
            return;
        };
        let EntityKind::Station { turbines } = &mut station.kind else {
            return;
        };
        for state in &self.turbines {
            match turbines.iter_mut().find(|turbine| turbine.id == state.id) {
                Some(turbine) => turbine.active = state.active,
                None => warn!(id = state.id, "snapshot names an unknown turbine, skipping"),
            }
        }
    }
}

pub fn save_snapshot(facility: &Facility, path: &Path) -> Result<()> {
    let snapshot = FacilitySnapshot::capture(facility);
    let json =
        serde_json::to_string_pretty(&snapshot).context("failed to serialize facility state")?;
    fs::write(path, json)
        .with_context(|| format!("failed to write facility state to {}", path.display()))
}

pub fn load_snapshot(path: &Path) -> Result<FacilitySnapshot> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read facility state from {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("invalid facility state in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facility::build_facility;
    use eframe::egui::Color32;

    #[test]
    fn capture_then_apply_round_trips_through_json() {
        let mut source = build_facility();

        {
            let station = source.station_mut().unwrap();
            let EntityKind::Station { turbines } = &mut station.kind else {
                unreachable!();
            };
            turbines[2].toggle();
            turbines[8].toggle();
        }
        {
            let entity = source.entity_mut("ЦПС").unwrap();
            entity.color = Color32::from_rgb(0x11, 0x22, 0x33);
            entity.rect = entity.rect.translate(eframe::egui::vec2(40.0, -25.0));
            let EntityKind::Consumer { connected } = &mut entity.kind else {
                unreachable!();
            };
            *connected = false;
        }

        let json = serde_json::to_string(&FacilitySnapshot::capture(&source)).unwrap();
        let snapshot: FacilitySnapshot = serde_json::from_str(&json).unwrap();

        let mut restored = build_facility();
        snapshot.apply(&mut restored);

        assert_eq!(
            restored.station().unwrap().generation_mw(),
            source.station().unwrap().generation_mw()
        );
        let cps = restored.entity("ЦПС").unwrap();
        assert!(!cps.connected());
        assert_eq!(cps.color, Color32::from_rgb(0x11, 0x22, 0x33));
        assert_eq!(cps.rect, source.entity("ЦПС").unwrap().rect);
        assert_eq!(restored.balance(), source.balance());
    }

    #[test]
    fn unknown_entries_are_skipped() {
        let snapshot = FacilitySnapshot {
            entities: vec![EntityState {
                name: "Куст 99".to_owned(),
                color: "#101010".to_owned(),
                x: 0.0,
                y: 0.0,
                connected: Some(false),
            }],
            turbines: vec![TurbineState {
                id: 42,
                active: false,
            }],
        };

        let mut facility = build_facility();
        let before = facility.balance();
        snapshot.apply(&mut facility);
        assert_eq!(facility.balance(), before);
    }

    #[test]
    fn bad_color_keeps_the_current_one() {
        let mut facility = build_facility();
        let original = facility.entity("ОБП").unwrap().color;

        let mut snapshot = FacilitySnapshot::capture(&facility);
        let entry = snapshot
            .entities
            .iter_mut()
            .find(|entry| entry.name == "ОБП")
            .unwrap();
        entry.color = "not-a-color".to_owned();

        snapshot.apply(&mut facility);
        assert_eq!(facility.entity("ОБП").unwrap().color, original);
    }

    #[test]
    fn snapshot_omits_connected_for_the_station() {
        let facility = build_facility();
        let snapshot = FacilitySnapshot::capture(&facility);

        let station_entry = snapshot
            .entities
            .iter()
            .find(|entry| entry.connected.is_none())
            .unwrap();
        assert_eq!(station_entry.name, facility.station().unwrap().name);
        assert_eq!(snapshot.turbines.len(), 9);
    }
}
