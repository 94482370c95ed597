//! Two-color additive mixer
//!
//! `domain` holds the color model and blend rule, `config` the user-facing
//! settings, and `app` the screen controller a GUI layer drives.

pub mod app;
pub mod config;
pub mod domain;
