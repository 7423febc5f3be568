//! Wire records exchanged with the accounting service.
//!
//! Every struct here tolerates missing keys and explicit nulls: both decode
//! to the field's zero value, mirroring how loosely the service fills its
//! payloads.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

mod entity;
mod report;

pub use entity::{
    Customer, EmailAddress, Entity, MetaData, PhysicalAddress, ReferenceType, TelephoneNumber,
    WebSiteAddress,
};
pub use report::{
    Cell, CellGroup, Column, Columns, NameValue, Report, ReportHeader, ReportKind, Row, Rows,
};

/// Decodes an explicit `null` the same way as an absent key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Failure payload returned by the service when it rejects a request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fault {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(rename = "Error", default, deserialize_with = "null_as_default")]
    pub errors: Vec<FaultError>,
}

/// A single reason listed in a [`Fault`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FaultError {
    #[serde(rename = "Message", default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(rename = "Detail", default, deserialize_with = "null_as_default")]
    pub detail: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub element: String,
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        for error in &self.errors {
            write!(f, " [{}] {}", error.code, error.message)?;
            if !error.detail.is_empty() {
                write!(f, ": {}", error.detail)?;
            }
        }
        Ok(())
    }
}

/// Top-level body the service sends back alongside a [`Fault`].
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct FaultEnvelope {
    #[serde(rename = "Fault")]
    pub fault: Fault,
}
