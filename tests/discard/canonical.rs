use std::thread;

use model_transform::{
    model::ModelValue,
    transform::{
        ALWAYS, DiscardAttributeChecker, TransformationContext, UNDEFINED, always, same_checker,
        undefined,
    },
};

use crate::{current_context, legacy_context, sample_values, write_attribute};

fn contexts() -> Vec<Box<dyn TransformationContext>> {
    vec![Box::new(legacy_context()), Box::new(current_context())]
}

#[test]
fn given_any_value_when_checked_against_always_then_it_is_discarded() {
    for context in contexts() {
        for value in sample_values() {
            let operation = write_attribute("max-size", value.clone());
            assert!(always().is_resource_attribute_discardable(
                "max-size",
                &value,
                context.as_ref()
            ));
            assert!(always().is_operation_parameter_discardable(
                "value",
                &value,
                &operation,
                context.as_ref()
            ));
        }
    }
}

#[test]
fn given_any_value_when_checked_against_undefined_then_it_is_kept() {
    for context in contexts() {
        for value in sample_values() {
            let operation = write_attribute("max-size", value.clone());
            assert!(
                !undefined().is_resource_attribute_discardable(
                    "max-size",
                    &value,
                    context.as_ref()
                ),
                "value={value:?}",
            );
            assert!(
                !undefined().is_operation_parameter_discardable(
                    "value",
                    &value,
                    &operation,
                    context.as_ref()
                ),
                "value={value:?}",
            );
        }
    }
}

#[test]
fn given_canonical_checkers_when_flags_are_queried_then_declared_intent_is_reported() {
    assert!(ALWAYS.discard_expressions());
    assert!(ALWAYS.discard_undefined());
    assert!(!UNDEFINED.discard_expressions());
    assert!(UNDEFINED.discard_undefined());
}

#[test]
fn given_concrete_max_size_when_checked_then_only_always_discards_it() {
    let value = ModelValue::Int(1024);
    let context = legacy_context();

    assert!(always().is_resource_attribute_discardable("max-size", &value, &context));
    assert!(!undefined().is_resource_attribute_discardable("max-size", &value, &context));
}

#[test]
fn given_undefined_max_size_when_checked_against_undefined_then_it_is_still_kept() {
    let context = legacy_context();

    assert!(undefined().discard_undefined());
    assert!(!undefined().is_resource_attribute_discardable(
        "max-size",
        &ModelValue::Undefined,
        &context
    ));
}

#[test]
fn given_repeated_references_when_compared_then_singletons_are_identical() {
    assert!(same_checker(always(), always()));
    assert!(same_checker(undefined(), undefined()));
    assert!(same_checker(always(), &ALWAYS));
    assert!(same_checker(undefined(), &UNDEFINED));
    assert!(!same_checker(always(), undefined()));
    assert!(std::ptr::eq(&ALWAYS, &ALWAYS));
}

#[test]
fn given_concurrent_passes_when_sharing_singletons_then_answers_and_identity_agree() {
    let handles: Vec<_> = (0..8)
        .map(|worker| {
            thread::spawn(move || {
                let context = if worker % 2 == 0 {
                    legacy_context()
                } else {
                    current_context()
                };
                let value = ModelValue::Int(worker);
                let checker = always();
                (
                    checker as *const dyn DiscardAttributeChecker as *const () as usize,
                    checker.is_resource_attribute_discardable("max-size", &value, &context),
                    undefined().is_resource_attribute_discardable("max-size", &value, &context),
                )
            })
        })
        .collect();

    let expected_address = always() as *const dyn DiscardAttributeChecker as *const () as usize;
    for handle in handles {
        let (address, always_answer, undefined_answer) =
            handle.join().expect("worker should not panic");
        assert_eq!(address, expected_address);
        assert!(always_answer);
        assert!(!undefined_answer);
    }
}
