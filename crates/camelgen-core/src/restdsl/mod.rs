//! Swagger model to Camel REST DSL statements.
//!
//! The transform is total: every well-typed [`Specification`] produces an
//! artifact, and absent or empty fields are left out of the generated calls
//! instead of being reported.
//!
//! ```
//! use camelgen_core::model::Specification;
//! use camelgen_core::restdsl::assemble;
//!
//! let spec = Specification {
//!     title: "Pet Store v2!!".into(),
//!     paths: Vec::new(),
//! };
//! let artifact = assemble(&spec);
//! assert_eq!(artifact.class_name, "PetStorev2");
//! assert_eq!(artifact.statements.len(), 1);
//! ```

pub mod configuration;
pub mod operation;
pub mod parameter;
pub mod path;
pub mod statement;

pub use configuration::{class_name, ConfigurationAssembler};
pub use operation::{OperationEmitter, OperationIdNaming, ProcessorNaming};
pub use statement::StatementBuilder;

use crate::ir::GeneratedArtifact;
use crate::model::Specification;

/// Assemble with the default processor naming.
pub fn assemble(spec: &Specification) -> GeneratedArtifact {
    ConfigurationAssembler::new().assemble(spec)
}
