//! Common utilities for the physics exercises
//!
//! This crate provides the physical constant table, sweep grids, error types,
//! and the egui/wgpu window harness shared by the potential, orbit and
//! oscillator programs.

pub mod chart;
pub mod constants;
pub mod equations_ui;
pub mod error;
pub mod graphics;
pub mod sweep;
pub mod window;

pub use constants::{PhysicalConstants, PHYSICAL};
pub use error::{AppError, GraphicsError, PhysicsError, PhysicsResult};
pub use graphics::GraphicsContext;
pub use sweep::SweepGrid;
pub use window::{run_figure, Figure};
