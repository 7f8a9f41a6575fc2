//! Conversions from external infrastructure errors into domain errors.

use std::io::Error as IoError;

use cfkit_domain::CfError;
use reqwest::header::InvalidHeaderValue;
use reqwest::Error as HttpError;
use serde_json::Error as JsonError;
use url::ParseError as UrlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub CfError);

impl From<InfraError> for CfError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<CfError> for InfraError {
    fn from(value: CfError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoCfError {
    fn into_cf(self) -> CfError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → CfError */
/* -------------------------------------------------------------------------- */

impl IntoCfError for HttpError {
    fn into_cf(self) -> CfError {
        if self.is_timeout() {
            return CfError::Network("HTTP request timed out".into());
        }

        #[cfg(not(target_arch = "wasm32"))]
        if self.is_connect() {
            return CfError::Network(format!("HTTP connection failure: {self}"));
        }

        if self.is_decode() {
            return CfError::Decode(self.to_string());
        }

        if self.is_builder() {
            return CfError::InvalidInput(self.to_string());
        }

        CfError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_cf())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → CfError */
/* -------------------------------------------------------------------------- */

impl IntoCfError for JsonError {
    fn into_cf(self) -> CfError {
        if self.is_io() {
            CfError::Internal(format!("JSON I/O failure: {self}"))
        } else {
            CfError::Decode(self.to_string())
        }
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_cf())
    }
}

/* -------------------------------------------------------------------------- */
/* url::ParseError, header values → CfError */
/* -------------------------------------------------------------------------- */

impl From<UrlError> for InfraError {
    fn from(value: UrlError) -> Self {
        InfraError(CfError::InvalidInput(format!("invalid URL: {value}")))
    }
}

impl From<InvalidHeaderValue> for InfraError {
    fn from(value: InvalidHeaderValue) -> Self {
        InfraError(CfError::InvalidInput(format!("invalid header value: {value}")))
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → CfError */
/* -------------------------------------------------------------------------- */

impl IntoCfError for IoError {
    fn into_cf(self) -> CfError {
        use std::io::ErrorKind;

        match self.kind() {
            ErrorKind::NotFound => CfError::NotFound(self.to_string()),
            ErrorKind::PermissionDenied => {
                CfError::Config(format!("permission denied: {self}"))
            }
            _ => CfError::Internal(self.to_string()),
        }
    }
}

impl From<IoError> for InfraError {
    fn from(value: IoError) -> Self {
        InfraError(value.into_cf())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
