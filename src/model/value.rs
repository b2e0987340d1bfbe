use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Key of the single-entry JSON object that carries an unresolved expression.
pub const EXPRESSION_VALUE_KEY: &str = "EXPRESSION_VALUE";

/// Shared undefined node handed out for absent attributes and parameters.
pub static UNDEFINED_VALUE: ModelValue = ModelValue::Undefined;

/// Dynamically typed, tree-shaped attribute value.
///
/// `Undefined` and `Expression` are distinct states, not concrete literals: an
/// expression such as `${jboss.max.size:10}` is only resolved on the host that
/// reads it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum ModelValue {
    #[default]
    Undefined,
    Expression(String),
    Boolean(bool),
    Int(i64),
    Double(f64),
    String(String),
    List(Vec<ModelValue>),
    Object(BTreeMap<String, ModelValue>),
}

impl ModelValue {
    pub fn expression(text: impl Into<String>) -> Self {
        Self::Expression(text.into())
    }

    pub fn is_defined(&self) -> bool {
        !matches!(self, Self::Undefined)
    }

    pub fn is_expression(&self) -> bool {
        matches!(self, Self::Expression(_))
    }

    /// Child lookup on an object node. Missing keys and non-object nodes yield
    /// [`UNDEFINED_VALUE`].
    pub fn get(&self, name: &str) -> &ModelValue {
        match self {
            Self::Object(children) => children.get(name).unwrap_or(&UNDEFINED_VALUE),
            _ => &UNDEFINED_VALUE,
        }
    }

    pub fn as_object(&self) -> Option<&BTreeMap<String, ModelValue>> {
        match self {
            Self::Object(children) => Some(children),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Expression(_) => "expression",
            Self::Boolean(_) => "boolean",
            Self::Int(_) => "int",
            Self::Double(_) => "double",
            Self::String(_) => "string",
            Self::List(_) => "list",
            Self::Object(_) => "object",
        }
    }
}

impl From<Value> for ModelValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Undefined,
            Value::Bool(flag) => Self::Boolean(flag),
            Value::Number(number) => match number.as_i64() {
                Some(int) => Self::Int(int),
                None => Self::Double(number.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(text) => Self::String(text),
            Value::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => {
                if map.len() == 1
                    && let Some(Value::String(expression)) = map.get(EXPRESSION_VALUE_KEY)
                {
                    return Self::Expression(expression.clone());
                }
                Self::Object(
                    map.into_iter()
                        .map(|(key, child)| (key, Self::from(child)))
                        .collect(),
                )
            }
        }
    }
}

impl From<ModelValue> for Value {
    fn from(value: ModelValue) -> Self {
        match value {
            ModelValue::Undefined => Value::Null,
            ModelValue::Expression(expression) => {
                let mut wrapper = Map::new();
                wrapper.insert(EXPRESSION_VALUE_KEY.to_string(), Value::String(expression));
                Value::Object(wrapper)
            }
            ModelValue::Boolean(flag) => Value::Bool(flag),
            ModelValue::Int(int) => Value::Number(int.into()),
            ModelValue::Double(double) => Number::from_f64(double)
                .map(Value::Number)
                .unwrap_or_else(|| Value::String(non_finite_text(double).to_string())),
            ModelValue::String(text) => Value::String(text),
            ModelValue::List(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            ModelValue::Object(children) => Value::Object(
                children
                    .into_iter()
                    .map(|(key, child)| (key, Value::from(child)))
                    .collect(),
            ),
        }
    }
}

// JSON has no NaN or infinity; a null here would read back as undefined.
fn non_finite_text(double: f64) -> &'static str {
    if double.is_nan() {
        "NaN"
    } else if double.is_sign_positive() {
        "Infinity"
    } else {
        "-Infinity"
    }
}

impl From<bool> for ModelValue {
    fn from(flag: bool) -> Self {
        Self::Boolean(flag)
    }
}

impl From<i64> for ModelValue {
    fn from(int: i64) -> Self {
        Self::Int(int)
    }
}

impl From<&str> for ModelValue {
    fn from(text: &str) -> Self {
        Self::String(text.to_string())
    }
}

impl From<String> for ModelValue {
    fn from(text: String) -> Self {
        Self::String(text)
    }
}
