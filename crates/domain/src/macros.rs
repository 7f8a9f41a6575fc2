//! Macro for implementing Display and FromStr for state enums
//!
//! The control plane reports states in upper case (`RUNNING`, `STARTED`)
//! while the client compares them in lower case, so parsing is
//! case-insensitive and rendering is always lower case.
//!
//! # Example
//!
//! ```rust
//! use cfkit_domain::impl_domain_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum PackageState {
//!     Pending,
//!     Staged,
//!     Failed,
//! }
//!
//! impl_domain_status_conversions!(PackageState {
//!     Pending => "pending",
//!     Staged => "staged",
//!     Failed => "failed",
//! });
//! ```

/// Implements Display and FromStr traits for state enums
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their lower-case
///   string representations
#[macro_export]
macro_rules! impl_domain_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => write!(f, $str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
