mod engine;
mod engine_config;
mod engine_core;
mod engine_init;
mod engine_snapshot;
mod events;
mod interaction_controller;
mod json_contract;
mod presentation;
mod validation;
mod visibility_controller;

pub use engine::HighlightEngine;
pub use engine_config::HighlightEngineConfig;
pub use engine_snapshot::EngineSnapshot;
pub use events::{ChartEvent, EventOutcome};
pub use json_contract::{ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshotJsonContractV1};
pub use presentation::{
    ActivePointStrategy, HighlightMode, PresentationConfig, PresentationResolver,
};
