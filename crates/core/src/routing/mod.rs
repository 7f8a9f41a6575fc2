//! Routes and domains

pub mod ports;
