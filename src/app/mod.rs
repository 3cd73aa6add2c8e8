use std::path::PathBuf;

use eframe::egui::{Context, Vec2};
use tracing::{info, warn};

use crate::facility::{BalanceSummary, Facility, build_facility, load_snapshot};

mod render_utils;
mod scheme;
mod ui;

pub struct EnergomapApp {
    model: ViewModel,
}

struct ViewModel {
    facility: Facility,
    state_path: PathBuf,
    selected: Option<String>,
    search: String,
    pan: Vec2,
    zoom: f32,
    drag_target: Option<usize>,
    save_feedback: Option<SaveFeedback>,
    summary: BalanceSummary,
}

struct SaveFeedback {
    message: String,
    is_error: bool,
}

impl EnergomapApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, state_path: String) -> Self {
        let state_path = PathBuf::from(state_path);
        let mut facility = build_facility();

        if state_path.exists() {
            match load_snapshot(&state_path) {
                Ok(snapshot) => {
                    snapshot.apply(&mut facility);
                    info!(path = %state_path.display(), "restored saved parameters");
                }
                Err(error) => {
                    warn!(path = %state_path.display(), "ignoring saved parameters: {error:#}");
                }
            }
        }

        Self {
            model: ViewModel::new(facility, state_path),
        }
    }
}

impl eframe::App for EnergomapApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.model.show(ctx);
    }
}
