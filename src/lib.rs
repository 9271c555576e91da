//! workshop: a console DIY-project tracker backed by SQLite.
//!
//! Layering, top down: `cli` (presentation) → `service` (domain
//! operations) → `db` (repositories built on a typed parameter binder, a
//! generic row extractor, and an explicit transaction controller).

pub mod cli;
pub mod db;
pub mod service;
