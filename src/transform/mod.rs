pub mod context;
pub mod discard;
pub mod error;
pub mod rules;

pub use context::{StaticTransformationContext, TransformationContext};
pub use discard::{
    ALWAYS, CanonicalDiscard, DefaultDiscardAttributeChecker, DiscardAttributeChecker,
    DiscardFlags, UNDEFINED, ValueDiscardHook, always, same_checker, undefined,
};
pub use error::{TransformError, TransformErrorKind};
pub use rules::{DiscardRuleSet, Discarded};
