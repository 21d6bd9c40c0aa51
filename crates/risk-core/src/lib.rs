//! # risk-core
//!
//! Core types, record generation, scoring, and report composition for riskgen.
//!
//! This crate holds everything that carries logic in a pipeline run:
//! - Entity structs for risk records, scored records, and the report model
//! - Severity enum with the raw-product thresholds
//! - Synthetic record generator (unseeded or seeded)
//! - Scorer: per-record score, aggregate severity counts, score histogram
//! - Report composer producing a rendering-agnostic [`entities::ReportModel`]
//! - Cross-cutting error types and CLI response types
//!
//! Rendering of charts, spreadsheets and documents lives in `risk-export`.

pub mod composer;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod generator;
pub mod ids;
pub mod responses;
pub mod scoring;
