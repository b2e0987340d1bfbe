use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    model::{ModelValue, OperationDescriptor},
    transform::context::TransformationContext,
};

/// Decides whether an attribute can be left out of a resource description or an
/// operation that is being translated for another model version.
///
/// Implementations are immutable and shared across concurrent translation passes.
/// Both decision methods are pure functions of their inputs and the read-only
/// context.
pub trait DiscardAttributeChecker: Send + Sync {
    /// Whether attributes holding an unresolved expression are meant to be discarded.
    fn discard_expressions(&self) -> bool;

    /// Whether undefined attributes are meant to be discarded.
    fn discard_undefined(&self) -> bool;

    fn is_operation_parameter_discardable(
        &self,
        attribute_name: &str,
        attribute_value: &ModelValue,
        operation: &OperationDescriptor,
        context: &dyn TransformationContext,
    ) -> bool;

    fn is_resource_attribute_discardable(
        &self,
        attribute_name: &str,
        attribute_value: &ModelValue,
        context: &dyn TransformationContext,
    ) -> bool;
}

/// Decision hook shape used by the canonical checkers.
pub type ValueDiscardHook = fn(&str, &ModelValue, &dyn TransformationContext) -> bool;

/// Declared intent of a checker. The flags are reported as-is and never gate the
/// checker's own decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscardFlags {
    pub discard_expressions: bool,
    pub discard_undefined: bool,
}

impl DiscardFlags {
    pub const fn new(discard_expressions: bool, discard_undefined: bool) -> Self {
        Self {
            discard_expressions,
            discard_undefined,
        }
    }
}

impl Default for DiscardFlags {
    fn default() -> Self {
        Self::new(false, true)
    }
}

/// Checker built from a set of flags and a single decision hook. Operation
/// parameters and resource attributes go through the same hook; the operation
/// itself is not consulted.
pub struct DefaultDiscardAttributeChecker<H = ValueDiscardHook> {
    flags: DiscardFlags,
    hook: H,
}

impl<H> DefaultDiscardAttributeChecker<H>
where
    H: Fn(&str, &ModelValue, &dyn TransformationContext) -> bool + Send + Sync,
{
    pub const fn new(flags: DiscardFlags, hook: H) -> Self {
        Self { flags, hook }
    }

    /// Never discard expressions, usually discard undefined values.
    pub fn with_default_flags(hook: H) -> Self {
        Self::new(DiscardFlags::default(), hook)
    }

    pub fn flags(&self) -> DiscardFlags {
        self.flags
    }

    pub fn is_value_discardable(
        &self,
        attribute_name: &str,
        attribute_value: &ModelValue,
        context: &dyn TransformationContext,
    ) -> bool {
        (self.hook)(attribute_name, attribute_value, context)
    }
}

impl<H> DiscardAttributeChecker for DefaultDiscardAttributeChecker<H>
where
    H: Fn(&str, &ModelValue, &dyn TransformationContext) -> bool + Send + Sync,
{
    fn discard_expressions(&self) -> bool {
        self.flags.discard_expressions
    }

    fn discard_undefined(&self) -> bool {
        self.flags.discard_undefined
    }

    fn is_operation_parameter_discardable(
        &self,
        attribute_name: &str,
        attribute_value: &ModelValue,
        _operation: &OperationDescriptor,
        context: &dyn TransformationContext,
    ) -> bool {
        self.is_value_discardable(attribute_name, attribute_value, context)
    }

    fn is_resource_attribute_discardable(
        &self,
        attribute_name: &str,
        attribute_value: &ModelValue,
        context: &dyn TransformationContext,
    ) -> bool {
        self.is_value_discardable(attribute_name, attribute_value, context)
    }
}

impl<H> fmt::Debug for DefaultDiscardAttributeChecker<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultDiscardAttributeChecker")
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}

fn always_discardable(_: &str, _: &ModelValue, _: &dyn TransformationContext) -> bool {
    true
}

// Never reports a discard even though the flags declare undefined values
// discardable. Rule tables depend on this exact answer.
fn never_discardable(_: &str, _: &ModelValue, _: &dyn TransformationContext) -> bool {
    false
}

/// Discards the attribute regardless of its value.
pub static ALWAYS: DefaultDiscardAttributeChecker = DefaultDiscardAttributeChecker::new(
    DiscardFlags::new(true, true),
    always_discardable as ValueDiscardHook,
);

/// Declared to discard undefined, non-expression attributes.
pub static UNDEFINED: DefaultDiscardAttributeChecker = DefaultDiscardAttributeChecker::new(
    DiscardFlags::new(false, true),
    never_discardable as ValueDiscardHook,
);

pub fn always() -> &'static dyn DiscardAttributeChecker {
    &ALWAYS
}

pub fn undefined() -> &'static dyn DiscardAttributeChecker {
    &UNDEFINED
}

/// Identity comparison, used by rule tables that reference checkers declaratively.
pub fn same_checker(
    left: &dyn DiscardAttributeChecker,
    right: &dyn DiscardAttributeChecker,
) -> bool {
    std::ptr::eq(left as *const _ as *const (), right as *const _ as *const ())
}

/// Names under which the canonical checkers are referenced from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalDiscard {
    Always,
    Undefined,
}

impl CanonicalDiscard {
    pub fn checker(self) -> &'static dyn DiscardAttributeChecker {
        match self {
            Self::Always => always(),
            Self::Undefined => undefined(),
        }
    }

    pub fn of(checker: &dyn DiscardAttributeChecker) -> Option<Self> {
        if same_checker(checker, always()) {
            Some(Self::Always)
        } else if same_checker(checker, undefined()) {
            Some(Self::Undefined)
        } else {
            None
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Undefined => "undefined",
        }
    }
}
