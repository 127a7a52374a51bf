//! Friday - Personal assistant backend
//!
//! This crate implements rule-based mood inference: lexicon scoring of free
//! text, behavioral prediction from task and journal activity, and
//! confidence-weighted fusion of the two, exposed over an authenticated
//! HTTP API.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
