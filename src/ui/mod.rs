//! egui widgets. Each function draws one region of the window and turns
//! user input into session commands.

pub mod figure;
pub mod panels;
pub mod plot;
