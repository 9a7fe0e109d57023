//! Shared fixtures for the integration suite.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use combat_core::{
    ActorId, ActorState, Cell, CombatState, CompassDir, Faction, SquareGrid, StatSheet,
    VisualRequest,
};
use runtime::{PresentationSink, TurnDriver};

/// Sink that records every visual step in arrival order.
#[derive(Default)]
pub struct RecordingSink {
    visuals: Mutex<Vec<VisualRequest>>,
}

impl RecordingSink {
    pub fn visuals(&self) -> Vec<VisualRequest> {
        self.visuals.lock().unwrap().clone()
    }
}

#[async_trait]
impl PresentationSink for RecordingSink {
    async fn present(&self, visual: &VisualRequest) {
        self.visuals.lock().unwrap().push(visual.clone());
    }
}

pub fn soldier_at(cell: Cell, faction: Faction) -> ActorState {
    ActorState::new(cell, CompassDir::North, faction, StatSheet::soldier(40, 30, 25))
}

pub fn place(state: &mut CombatState, id: u32, actor: ActorState) -> ActorId {
    let id = ActorId(id);
    state.insert_actor(id, actor);
    id
}

/// Driver over an open grid with a recording sink.
pub fn recorded_driver(
    state: CombatState,
    grid: SquareGrid,
) -> (TurnDriver, Arc<RecordingSink>) {
    let grid = Arc::new(grid);
    let sink = Arc::new(RecordingSink::default());
    let driver = TurnDriver::new(state, grid.clone(), grid, sink.clone());
    (driver, sink)
}
