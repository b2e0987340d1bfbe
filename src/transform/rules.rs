use std::{collections::BTreeMap, fmt};

use crate::{
    model::{ModelValue, OperationDescriptor},
    transform::{
        context::TransformationContext,
        discard::{CanonicalDiscard, DiscardAttributeChecker},
        error::{TransformError, duplicate_rule, invalid_config, invalid_resource},
    },
};

/// Output of a discard pass: the translated value and the attribute names that
/// were left out, in attribute order.
#[derive(Debug, Clone, PartialEq)]
pub struct Discarded<T> {
    pub value: T,
    pub discarded: Vec<String>,
}

/// Attribute name to checker table for one target model version.
#[derive(Default)]
pub struct DiscardRuleSet<'a> {
    rules: BTreeMap<String, &'a dyn DiscardAttributeChecker>,
}

impl<'a> DiscardRuleSet<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        attribute: impl Into<String>,
        checker: &'a dyn DiscardAttributeChecker,
    ) -> Result<(), TransformError> {
        let attribute = attribute.into();
        if attribute.is_empty() {
            return Err(invalid_config("discard rule attribute cannot be empty"));
        }
        if self.rules.contains_key(&attribute) {
            return Err(duplicate_rule(format!(
                "discard rule already registered for attribute '{attribute}'"
            )));
        }

        self.rules.insert(attribute, checker);
        Ok(())
    }

    pub fn with_rule(
        mut self,
        attribute: impl Into<String>,
        checker: &'a dyn DiscardAttributeChecker,
    ) -> Result<Self, TransformError> {
        self.insert(attribute, checker)?;
        Ok(self)
    }

    pub fn checker_for(&self, attribute: &str) -> Option<&'a dyn DiscardAttributeChecker> {
        self.rules.get(attribute).copied()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn discard_resource_attributes(
        &self,
        resource: &ModelValue,
        context: &dyn TransformationContext,
    ) -> Result<Discarded<ModelValue>, TransformError> {
        let Some(attributes) = resource.as_object() else {
            return Err(invalid_resource(format!(
                "resource description must be an object, got {}",
                resource.type_name()
            )));
        };

        let mut kept = BTreeMap::new();
        let mut discarded = Vec::new();
        for (name, value) in attributes {
            let discard = self.checker_for(name).is_some_and(|checker| {
                is_applicable(checker, value)
                    && checker.is_resource_attribute_discardable(name, value, context)
            });
            if discard {
                tracing::debug!(
                    target: "transform",
                    attribute = %name,
                    policy = self.policy_label(name),
                    value_type = value.type_name(),
                    "resource_attribute_discarded"
                );
                discarded.push(name.clone());
            } else {
                kept.insert(name.clone(), value.clone());
            }
        }

        tracing::debug!(
            target: "transform",
            target_version = %context.target_version(),
            attributes = attributes.len(),
            discarded = discarded.len(),
            "resource_discard_completed"
        );

        Ok(Discarded {
            value: ModelValue::Object(kept),
            discarded,
        })
    }

    pub fn discard_operation_parameters(
        &self,
        operation: &OperationDescriptor,
        context: &dyn TransformationContext,
    ) -> Discarded<OperationDescriptor> {
        let mut kept = BTreeMap::new();
        let mut discarded = Vec::new();
        for (name, value) in &operation.parameters {
            let discard = self.checker_for(name).is_some_and(|checker| {
                is_applicable(checker, value)
                    && checker.is_operation_parameter_discardable(name, value, operation, context)
            });
            if discard {
                tracing::debug!(
                    target: "transform",
                    operation = %operation.name,
                    parameter = %name,
                    policy = self.policy_label(name),
                    value_type = value.type_name(),
                    "operation_parameter_discarded"
                );
                discarded.push(name.clone());
            } else {
                kept.insert(name.clone(), value.clone());
            }
        }

        tracing::debug!(
            target: "transform",
            operation = %operation.name,
            target_version = %context.target_version(),
            parameters = operation.parameters.len(),
            discarded = discarded.len(),
            "operation_discard_completed"
        );

        Discarded {
            value: OperationDescriptor {
                name: operation.name.clone(),
                parameters: kept,
            },
            discarded,
        }
    }

    fn policy_label(&self, attribute: &str) -> &'static str {
        self.checker_for(attribute)
            .and_then(CanonicalDiscard::of)
            .map(CanonicalDiscard::as_str)
            .unwrap_or("custom")
    }
}

impl fmt::Debug for DiscardRuleSet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.rules
                    .keys()
                    .map(|attribute| (attribute, self.policy_label(attribute))),
            )
            .finish()
    }
}

/// A checker is only asked about undefined or expression values when its flags
/// declare it handles them.
fn is_applicable(checker: &dyn DiscardAttributeChecker, value: &ModelValue) -> bool {
    if !value.is_defined() {
        return checker.discard_undefined();
    }
    if value.is_expression() {
        return checker.discard_expressions();
    }
    true
}
