//! egui widgets for the live figure window.

pub mod plot;
