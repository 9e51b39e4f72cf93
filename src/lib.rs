//! BotLaHug - Club management service
//!
//! Seasons, classes, athletes and registrations for multi-tenant sports
//! clubs, plus the public weekly schedule built from them.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
