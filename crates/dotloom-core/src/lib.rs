//! Dotloom Core Types and Definitions
//!
//! This crate provides the foundational types for the dotloom diagram
//! generator. It includes:
//!
//! - The diagram model: [`model::Diagram`], [`model::Entity`],
//!   [`model::Relationship`] and their parts, built once per conversion
//!   run and immutable afterwards.
//! - Configuration shapes with compiled-in defaults:
//!   [`config::DiagramConfig`] and its sections.
//! - Visual styling: [`style::StyleDefinition`], [`style::StyleSection`],
//!   and the [`style::StyleResolver`] cascade that computes effective
//!   style values per entity, section, and property.

pub mod config;
pub mod model;
pub mod style;
