use std::collections::HashMap;

use eframe::egui::{Color32, Rect};

pub const TURBINE_COUNT: u32 = 9;
pub const TURBINE_POWER_MW: f64 = 16.0;

#[derive(Clone, Debug)]
pub struct Turbine {
    pub id: u32,
    pub power_mw: f64,
    pub active: bool,
}

impl Turbine {
    pub fn toggle(&mut self) {
        self.active = !self.active;
    }
}

/// Explicit entity kind. The station is the only generator; everything else
/// is a pure consumer. Aggregation dispatches on this, never on names.
#[derive(Clone, Debug)]
pub enum EntityKind {
    Station { turbines: Vec<Turbine> },
    Consumer { connected: bool },
}

#[derive(Clone, Debug)]
pub struct Entity {
    pub name: String,
    pub rect: Rect,
    pub color: Color32,
    pub power_mw: f64,
    pub heat_gcal_h: f64,
    pub distance_km: f64,
    pub summer_load_pct: u8,
    pub winter_load_pct: u8,
    pub kind: EntityKind,
}

impl Entity {
    /// Generated power, always derived from the active turbine set so it can
    /// never drift from the toggles. `None` for consumers.
    pub fn generation_mw(&self) -> Option<f64> {
        match &self.kind {
            EntityKind::Station { turbines } => Some(
                turbines
                    .iter()
                    .filter(|turbine| turbine.active)
                    .map(|turbine| turbine.power_mw)
                    .sum(),
            ),
            EntityKind::Consumer { .. } => None,
        }
    }

    pub fn connected(&self) -> bool {
        match &self.kind {
            EntityKind::Station { .. } => true,
            EntityKind::Consumer { connected } => *connected,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BalanceSummary {
    pub generation_mw: f64,
    pub consumption_mw: f64,
    pub balance_mw: f64,
}

/// The process-wide registry: every placed object in deterministic insertion
/// order (station, consumers, wells), with unique names doubling as lookup
/// keys.
pub struct Facility {
    entities: Vec<Entity>,
    index_by_name: HashMap<String, usize>,
}

impl Facility {
    pub fn new(entities: Vec<Entity>) -> Self {
        let index_by_name = entities
            .iter()
            .enumerate()
            .map(|(index, entity)| (entity.name.clone(), index))
            .collect();
        Self {
            entities,
            index_by_name,
        }
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn entities_mut(&mut self) -> &mut [Entity] {
        &mut self.entities
    }

    pub fn entity(&self, name: &str) -> Option<&Entity> {
        self.index_by_name
            .get(name)
            .and_then(|&index| self.entities.get(index))
    }

    pub fn entity_mut(&mut self, name: &str) -> Option<&mut Entity> {
        let index = *self.index_by_name.get(name)?;
        self.entities.get_mut(index)
    }

    pub fn station(&self) -> Option<&Entity> {
        self.entities
            .iter()
            .find(|entity| matches!(entity.kind, EntityKind::Station { .. }))
    }

    pub fn station_mut(&mut self) -> Option<&mut Entity> {
        self.entities
            .iter_mut()
            .find(|entity| matches!(entity.kind, EntityKind::Station { .. }))
    }

    /// Pure sum over the current flags; idempotent and order-independent.
    pub fn balance(&self) -> BalanceSummary {
        let generation_mw: f64 = self.entities.iter().filter_map(Entity::generation_mw).sum();
        let consumption_mw: f64 = self
            .entities
            .iter()
            .filter_map(|entity| match entity.kind {
                EntityKind::Consumer { connected: true } => Some(entity.power_mw),
                _ => None,
            })
            .sum();

        BalanceSummary {
            generation_mw,
            consumption_mw,
            balance_mw: generation_mw - consumption_mw,
        }
    }
}
