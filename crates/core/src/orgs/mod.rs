//! Organizations and spaces

pub mod ports;
