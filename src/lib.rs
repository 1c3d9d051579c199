//! MyProtection - protection exposure calculator and coverage recommendations
//!
//! This crate sums a household's declared assets into an exposure figure,
//! recommends a liability coverage tier for it, compares that tier with the
//! coverage the user already has, and sequences the form, result and email
//! steps around one in-memory session.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
