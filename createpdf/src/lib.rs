pub mod state;
pub mod workflow;
