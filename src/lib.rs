//! Decorative 3D backdrop of drifting models
//!
//! The binary hosts [`backdrop_core::Animator`] in a winit window; this library
//! exposes its configuration and systems for testing.

pub mod config;
pub mod systems;
