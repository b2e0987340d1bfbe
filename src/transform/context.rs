use std::collections::BTreeSet;

use crate::model::ModelVersion;

/// Read-only view of the host a translation pass is targeting.
pub trait TransformationContext: Send + Sync {
    fn target_version(&self) -> &ModelVersion;

    fn supports_capability(&self, capability: &str) -> bool;
}

/// Context with a fixed target version and capability set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticTransformationContext {
    target_version: ModelVersion,
    capabilities: BTreeSet<String>,
}

impl StaticTransformationContext {
    pub fn new(target_version: ModelVersion) -> Self {
        Self {
            target_version,
            capabilities: BTreeSet::new(),
        }
    }

    pub fn with_capability(mut self, capability: impl Into<String>) -> Self {
        self.capabilities.insert(capability.into());
        self
    }

    pub fn with_capabilities<I, S>(mut self, capabilities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.capabilities
            .extend(capabilities.into_iter().map(Into::into));
        self
    }

    pub fn capabilities(&self) -> impl Iterator<Item = &str> {
        self.capabilities.iter().map(String::as_str)
    }
}

impl TransformationContext for StaticTransformationContext {
    fn target_version(&self) -> &ModelVersion {
        &self.target_version
    }

    fn supports_capability(&self, capability: &str) -> bool {
        self.capabilities.contains(capability)
    }
}
