//! egui front end: shared state, controller, view models and renderer.

pub mod controller;
pub mod state;
pub mod ui;
pub mod view_model;
