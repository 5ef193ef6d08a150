// src/panel/mod.rs
//! Form state, draft generation and dispatch to the mail launcher

pub mod controller;
pub mod state;

pub use controller::{PanelController, RestoredFrom};
pub use state::{PanelForm, PanelState};
