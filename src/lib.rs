//! Weather widget - a single-screen current-conditions lookup
//!
//! This library exposes the widget's modules for the binary and for testing.

pub mod action;
pub mod api;
pub mod components;
pub mod config;
pub mod effect;
pub mod error;
pub mod icon;
pub mod reducer;
pub mod sprites;
pub mod state;
pub mod telemetry;
