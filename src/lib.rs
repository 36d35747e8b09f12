// Main library entry point for Taintrace.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;
