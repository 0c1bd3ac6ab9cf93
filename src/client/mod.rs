//! Host-facing callbacks: one per rendered frame, one per client tick
pub mod render;
pub mod tick;

pub use render::{BeamPlan, MarkerPlan, MarkerSink, plan_markers, render_frame};
pub use tick::{ClientHost, PlayerState, TickInput, WaypointClient};
