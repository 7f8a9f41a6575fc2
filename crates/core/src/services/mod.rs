//! Service offerings and instances

pub mod ports;
