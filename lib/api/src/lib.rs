//! # textsim API
//!
//! JSON-over-HTTP surface for the comparison facade.

pub mod rest;

pub use rest::RestApi;
