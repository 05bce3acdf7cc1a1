pub mod analyzers;
pub mod error;
pub mod model;
pub mod output;
pub mod registry;
pub mod validate;

pub use error::{FieldError, RegistryError, ValidationResult};
pub use model::{Grade, Student};
pub use registry::Registry;
