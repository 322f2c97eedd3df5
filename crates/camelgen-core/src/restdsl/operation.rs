//! One REST DSL statement per operation.

use super::parameter::append_param;
use super::statement::StatementBuilder;
use crate::ir::{Argument, GeneratedStatement, SLOT};
use crate::model::{HttpMethod, Operation};

/// Chooses the processor a generated route hands exchanges to.
pub trait ProcessorNaming {
    fn processor_name(&self, operation: &Operation) -> String;
}

/// Uses the operation id unchanged, empty ids included.
#[derive(Debug, Clone, Copy, Default)]
pub struct OperationIdNaming;

impl ProcessorNaming for OperationIdNaming {
    fn processor_name(&self, operation: &Operation) -> String {
        operation.id.clone()
    }
}

impl<F> ProcessorNaming for F
where
    F: Fn(&Operation) -> String,
{
    fn processor_name(&self, operation: &Operation) -> String {
        self(operation)
    }
}

/// Builds the statements for operations under one path.
pub struct OperationEmitter<'a> {
    path: &'a str,
    naming: &'a dyn ProcessorNaming,
}

impl<'a> OperationEmitter<'a> {
    pub fn new(path: &'a str, naming: &'a dyn ProcessorNaming) -> Self {
        Self { path, naming }
    }

    /// `rest.<verb>(path)`, id, description, consumes, produces, parameters,
    /// then `.route().process(name)`.
    pub fn emit(&self, method: HttpMethod, operation: &Operation) -> GeneratedStatement {
        let mut statement = StatementBuilder::new(
            format!("rest.{}({})", SLOT, SLOT),
            vec![
                Argument::Literal(method.as_lowercase().to_string()),
                Argument::Str(self.path.to_string()),
            ],
        );

        statement.append_str("id", Some(operation.id.as_str()));
        statement.append_str("description", operation.description.as_deref());
        statement.append_joined("consumes", &operation.consumes);
        statement.append_joined("produces", &operation.produces);

        for parameter in &operation.parameters {
            append_param(&mut statement, parameter);
        }

        statement.push(
            format!(".route().process({})", SLOT),
            vec![Argument::Str(self.naming.processor_name(operation))],
        );

        statement.finish()
    }
}
