//! # hba-core
//!
//! Entity types for the HBA project tracker.
//!
//! This crate provides the structs shared between the database layer and the
//! CLI: students, class projects, and the grade records tying them together.
//! All three map one-to-one onto tables owned by the database; nothing here
//! is cached or carries behavior.

pub mod entities;
