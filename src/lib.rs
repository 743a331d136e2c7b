//! AHP Sherpa - Pairwise comparison decision analysis
//!
//! This crate implements the Analytic Hierarchy Process: criteria and
//! alternatives are compared pairwise on the 1/9..9 reciprocal scale, each
//! comparison matrix yields a priority vector, and the vectors combine into
//! a ranking of alternatives.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
