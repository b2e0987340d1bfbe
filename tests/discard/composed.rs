use model_transform::{
    model::{ModelValue, ModelVersion, OperationDescriptor},
    transform::{
        DefaultDiscardAttributeChecker, DiscardAttributeChecker, DiscardFlags,
        TransformationContext, ValueDiscardHook, same_checker, undefined,
    },
};

use crate::{current_context, legacy_context, sample_values, write_attribute};

const EVICTION_REWORK: ModelVersion = ModelVersion::new(2, 0, 0);

fn discard_before_eviction_rework(
    _name: &str,
    value: &ModelValue,
    context: &dyn TransformationContext,
) -> bool {
    !value.is_expression() && *context.target_version() < EVICTION_REWORK
}

#[test]
fn given_zero_argument_flags_when_queried_then_expressions_kept_and_undefined_dropped() {
    let checker = DefaultDiscardAttributeChecker::with_default_flags(
        discard_before_eviction_rework as ValueDiscardHook,
    );

    assert!(!checker.discard_expressions());
    assert!(checker.discard_undefined());
}

#[test]
fn given_explicit_flags_when_hook_disagrees_then_flags_are_still_reported_verbatim() {
    let checker = DefaultDiscardAttributeChecker::new(
        DiscardFlags::new(true, false),
        |_: &str, _: &ModelValue, _: &dyn TransformationContext| false,
    );

    assert!(checker.discard_expressions());
    assert!(!checker.discard_undefined());
    assert!(!checker.is_resource_attribute_discardable(
        "max-size",
        &ModelValue::expression("${a}"),
        &legacy_context()
    ));
}

#[test]
fn given_default_base_checker_when_both_paths_evaluated_then_answers_match() {
    let checker = DefaultDiscardAttributeChecker::with_default_flags(
        |name: &str, value: &ModelValue, context: &dyn TransformationContext| {
            name.starts_with("eviction")
                && value.is_defined()
                && !context.supports_capability("cache.eviction")
        },
    );
    let unrelated_operation = OperationDescriptor::new("remove");

    for context in [legacy_context(), current_context()] {
        for name in ["eviction-strategy", "max-size"] {
            for value in sample_values() {
                let invoked = write_attribute(name, value.clone());
                let expected = checker.is_resource_attribute_discardable(name, &value, &context);
                assert_eq!(
                    checker.is_operation_parameter_discardable(name, &value, &invoked, &context),
                    expected,
                );
                assert_eq!(
                    checker.is_operation_parameter_discardable(
                        name,
                        &value,
                        &unrelated_operation,
                        &context
                    ),
                    expected,
                );
            }
        }
    }
}

#[test]
fn given_version_gated_hook_when_target_differs_then_decision_follows_context() {
    let checker = DefaultDiscardAttributeChecker::with_default_flags(
        discard_before_eviction_rework as ValueDiscardHook,
    );
    let value = ModelValue::from("LRU");

    assert!(checker.is_resource_attribute_discardable(
        "eviction-strategy",
        &value,
        &legacy_context()
    ));
    assert!(!checker.is_resource_attribute_discardable(
        "eviction-strategy",
        &value,
        &current_context()
    ));
    assert!(!checker.is_resource_attribute_discardable(
        "eviction-strategy",
        &ModelValue::expression("${strategy}"),
        &legacy_context()
    ));
}

#[test]
fn given_custom_checker_with_same_flags_when_compared_then_it_is_not_the_canonical_one() {
    let lookalike = DefaultDiscardAttributeChecker::new(
        DiscardFlags::new(false, true),
        |_: &str, _: &ModelValue, _: &dyn TransformationContext| false,
    );

    assert!(!same_checker(&lookalike, undefined()));
}
