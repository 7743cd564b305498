use crate::Result;

use serde::{Deserialize, Serialize};

/// An object description as returned by the remote describe endpoint.
///
/// Only the parts the mapper needs are kept; unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSchema {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub fields: Vec<RawField>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawField {
    pub name: String,

    #[serde(default)]
    pub relationship_name: Option<String>,

    #[serde(rename = "type", default)]
    pub ty: String,

    #[serde(default)]
    pub updateable: bool,
}

impl RawSchema {
    pub fn from_json(json: &str) -> Result<RawSchema> {
        Ok(serde_json::from_str(json)?)
    }
}

impl RawField {
    pub fn new(name: impl Into<String>, ty: impl Into<String>, updateable: bool) -> RawField {
        RawField {
            name: name.into(),
            relationship_name: None,
            ty: ty.into(),
            updateable,
        }
    }

    pub fn relationship(mut self, relationship_name: impl Into<String>) -> RawField {
        self.relationship_name = Some(relationship_name.into());
        self
    }
}
