//! Walks the operations declared under a single path.

use super::operation::{OperationEmitter, ProcessorNaming};
use crate::ir::GeneratedStatement;
use crate::model::PathItem;

/// Append one statement per operation of `item`, in declaration order.
pub fn visit_path(
    path: &str,
    item: &PathItem,
    naming: &dyn ProcessorNaming,
    statements: &mut Vec<GeneratedStatement>,
) {
    let emitter = OperationEmitter::new(path, naming);
    for (method, operation) in &item.operations {
        log::debug!("Emitting {} {} ({})", method, path, operation.id);
        statements.push(emitter.emit(*method, operation));
    }
}
