//! Assembles the whole `configure()` body for a specification.

use once_cell::sync::Lazy;
use regex::Regex;

use super::operation::{OperationIdNaming, ProcessorNaming};
use super::path::visit_path;
use crate::ir::{Argument, Fragment, GeneratedArtifact, GeneratedStatement, HostType, SLOT};
use crate::model::Specification;

/// Any character Java rejects as an identifier part.
static NON_IDENTIFIER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"[^\p{L}\p{Nl}\p{Nd}\p{Mn}\p{Mc}\p{Pc}\p{Sc}\p{Cf}\x00-\x08\x0E-\x1B\x7F-\x9F]",
    )
    .expect("identifier pattern is valid")
});

/// Derive the generated class name from a specification title.
///
/// Keeps the characters that may appear in a Java identifier and drops the
/// rest, preserving order. The result is not checked for a legal first
/// character and may be empty.
pub fn class_name(title: &str) -> String {
    NON_IDENTIFIER_RE.replace_all(title, "").into_owned()
}

/// Statement declaring the root rest definition handle.
pub fn bootstrap_statement() -> GeneratedStatement {
    GeneratedStatement {
        fragments: vec![Fragment::new(
            format!("final {} rest = rest()", SLOT),
            vec![Argument::Type(HostType::RestDefinition)],
        )],
    }
}

/// Turns a [`Specification`] into a [`GeneratedArtifact`].
pub struct ConfigurationAssembler<N = OperationIdNaming> {
    naming: N,
}

impl Default for ConfigurationAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigurationAssembler {
    pub fn new() -> Self {
        Self {
            naming: OperationIdNaming,
        }
    }
}

impl<N: ProcessorNaming> ConfigurationAssembler<N> {
    /// Use a custom processor naming for the trailing `.process(..)` call.
    pub fn with_naming(naming: N) -> Self {
        Self { naming }
    }

    pub fn assemble(&self, spec: &Specification) -> GeneratedArtifact {
        let mut statements = Vec::with_capacity(1 + spec.operation_count());
        statements.push(bootstrap_statement());

        for (path, item) in &spec.paths {
            visit_path(path, item, &self.naming, &mut statements);
        }

        GeneratedArtifact {
            class_name: class_name(&spec.title),
            statements,
        }
    }
}
