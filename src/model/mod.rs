pub mod operation;
pub mod value;
pub mod version;

pub use operation::OperationDescriptor;
pub use value::{EXPRESSION_VALUE_KEY, ModelValue, UNDEFINED_VALUE};
pub use version::ModelVersion;
