//! Error conversion implementations.
//!
//! This module contains From trait implementations to convert from internal
//! error types to the unified Error type.

#[cfg(feature = "pptx")]
use super::types::Error;

#[cfg(feature = "pptx")]
impl From<crate::ooxml::OoxmlError> for Error {
    fn from(err: crate::ooxml::OoxmlError) -> Self {
        use crate::ooxml::OoxmlError;
        match err {
            OoxmlError::Opc(opc_err) => Error::from(opc_err),
            OoxmlError::Xml(s) => Error::XmlError(s),
            OoxmlError::PartNotFound(s) => Error::ComponentNotFound(s),
            OoxmlError::InvalidContentType { expected, got } => Error::InvalidFormat(format!(
                "expected content type {}, got {}",
                expected, got
            )),
            OoxmlError::InvalidRelationship(s) => Error::InvalidFormat(s),
            OoxmlError::InvalidFormat(s) => Error::InvalidFormat(s),
            OoxmlError::Io(e) => Error::Io(e),
        }
    }
}

#[cfg(feature = "pptx")]
impl From<crate::ooxml::opc::error::OpcError> for Error {
    fn from(err: crate::ooxml::opc::error::OpcError) -> Self {
        use crate::ooxml::opc::error::OpcError;
        match err {
            OpcError::IoError(e) => Error::Io(e),
            OpcError::ZipError(e) => Error::ZipError(e.to_string()),
            OpcError::PartNotFound(s) => Error::ComponentNotFound(s),
            OpcError::XmlError(s) => Error::XmlError(s),
            OpcError::QuickXmlError(e) => Error::XmlError(e.to_string()),
            other => Error::InvalidFormat(other.to_string()),
        }
    }
}
