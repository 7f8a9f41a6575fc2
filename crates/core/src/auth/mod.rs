//! Authentication, endpoint and password management

pub mod password;
pub mod ports;

pub use password::PasswordScore;
