//! Orrery - Interactive Solar System Animation
//!
//! A library crate exposing the simulation, input, and rendering components
//! for testing and integration purposes.

pub mod bodies;
pub mod camera;
pub mod input;
pub mod motion;
pub mod render;
pub mod sim;
pub mod types;
pub mod ui;
