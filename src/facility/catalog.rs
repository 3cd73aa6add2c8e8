//! Static per-object attributes, fixed at startup. The named entries and the
//! generated well series are the single source of truth copied into each
//! entity when the facility is built.

pub const STATION_NAME: &str = "ГТЭС";
pub const STATION_COLOR: &str = "#a8d8ea";
pub const WELL_COLOR: &str = "#e8f4f8";
pub const WELL_COUNT: u32 = 26;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaticAttributes {
    pub power_mw: f64,
    pub heat_gcal_h: f64,
    pub distance_km: f64,
    pub summer_load_pct: u8,
    pub winter_load_pct: u8,
}

pub struct ConsumerSpec {
    pub name: &'static str,
    pub color: &'static str,
    pub attrs: StaticAttributes,
}

pub const STATION_ATTRS: StaticAttributes = StaticAttributes {
    power_mw: 114.0,
    heat_gcal_h: 2.74,
    distance_km: 0.0,
    summer_load_pct: 0,
    winter_load_pct: 0,
};

/// Primary consumers in placement order.
pub const CONSUMERS: [ConsumerSpec; 6] = [
    ConsumerSpec {
        name: "ЦПС",
        color: "#f7c5cc",
        attrs: StaticAttributes {
            power_mw: 22.0,
            heat_gcal_h: 0.0,
            distance_km: 0.3,
            summer_load_pct: 70,
            winter_load_pct: 55,
        },
    },
    ConsumerSpec {
        name: "УКПГ",
        color: "#c4dfaa",
        attrs: StaticAttributes {
            power_mw: 30.0,
            heat_gcal_h: 3.04,
            distance_km: 0.5,
            summer_load_pct: 90,
            winter_load_pct: 95,
        },
    },
    ConsumerSpec {
        name: "ОБП",
        color: "#ffd59e",
        attrs: StaticAttributes {
            power_mw: 9.0,
            heat_gcal_h: 0.64,
            distance_km: 3.0,
            summer_load_pct: 80,
            winter_load_pct: 90,
        },
    },
    ConsumerSpec {
        name: "ВЖК",
        color: "#d3b5e5",
        attrs: StaticAttributes {
            power_mw: 2.0,
            heat_gcal_h: 0.35,
            distance_km: 3.5,
            summer_load_pct: 100,
            winter_load_pct: 100,
        },
    },
    ConsumerSpec {
        name: "ПЖК",
        color: "#ffaaa5",
        attrs: StaticAttributes {
            power_mw: 3.0,
            heat_gcal_h: 2.58,
            distance_km: 4.0,
            summer_load_pct: 100,
            winter_load_pct: 100,
        },
    },
    ConsumerSpec {
        name: "ПСП",
        color: "#b5e8e0",
        attrs: StaticAttributes {
            power_mw: 10.0,
            heat_gcal_h: 1.91,
            distance_km: 100.0,
            summer_load_pct: 100,
            winter_load_pct: 100,
        },
    },
];

pub fn well_name(index: u32) -> String {
    format!("Куст {index}")
}

/// Wells follow a generated series: the first well draws 0.7 МВт, the rest
/// cycle through 0.7..1.6 by the last digit of their index; the first 19 sit
/// every half kilometre, the far group every kilometre from 17 km out.
pub fn well_attributes(index: u32) -> StaticAttributes {
    let power_mw = if index == 1 {
        0.7
    } else {
        0.7 + f64::from(index % 10) * 0.1
    };
    let distance_km = if index <= 19 {
        1.0 + f64::from(index - 1) * 0.5
    } else {
        17.0 + f64::from(index - 20)
    };

    StaticAttributes {
        power_mw,
        heat_gcal_h: 0.0,
        distance_km,
        summer_load_pct: 50,
        winter_load_pct: 100,
    }
}
