use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::value::{ModelValue, UNDEFINED_VALUE};

/// A management operation as seen by a translation pass: its name and the named
/// parameters it was invoked with.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OperationDescriptor {
    pub name: String,
    #[serde(default)]
    pub parameters: BTreeMap<String, ModelValue>,
}

impl OperationDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: BTreeMap::new(),
        }
    }

    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<ModelValue>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }

    /// Parameters that were not supplied read as undefined.
    pub fn parameter(&self, name: &str) -> &ModelValue {
        self.parameters.get(name).unwrap_or(&UNDEFINED_VALUE)
    }
}
