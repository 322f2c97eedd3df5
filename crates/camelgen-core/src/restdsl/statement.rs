//! Accumulates the fragments of one REST DSL call chain.

use std::fmt::Display;

use crate::ir::{Argument, Fragment, GeneratedStatement, HostType, SLOT};

/// Growing builder chain for a single statement.
///
/// Every `append_*` method adds at most one `.method(..)` call. Absent or
/// empty values add nothing.
#[derive(Debug, Default)]
pub struct StatementBuilder {
    fragments: Vec<Fragment>,
}

impl StatementBuilder {
    /// Start a statement with a leading fragment.
    pub fn new(template: impl Into<String>, args: Vec<Argument>) -> Self {
        Self {
            fragments: vec![Fragment::new(template, args)],
        }
    }

    fn call(&mut self, method: &str, arg: Argument) {
        self.fragments
            .push(Fragment::new(format!("\n.{}({})", method, SLOT), vec![arg]));
    }

    /// Boolean flag, written as a bare `true`/`false` literal.
    pub fn append_bool(&mut self, method: &str, value: Option<bool>) {
        if let Some(value) = value {
            self.call(method, Argument::Literal(value.to_string()));
        }
    }

    /// Constant of a host enum type, e.g. `RestParamType.query`.
    pub fn append_enum(&mut self, method: &str, ty: HostType, value: Option<&str>) {
        if let Some(constant) = value.filter(|v| !v.is_empty()) {
            self.call(
                method,
                Argument::EnumConstant {
                    ty,
                    constant: constant.to_string(),
                },
            );
        }
    }

    /// Any displayable value, inserted unquoted.
    pub fn append_raw<T: Display>(&mut self, method: &str, value: Option<T>) {
        if let Some(value) = value {
            self.call(method, Argument::Literal(value.to_string()));
        }
    }

    /// String value, written as a quoted literal.
    pub fn append_str(&mut self, method: &str, value: Option<&str>) {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.call(method, Argument::Str(value.to_string()));
        }
    }

    /// Comma-joined list passed as a single string argument.
    pub fn append_joined(&mut self, method: &str, values: &[String]) {
        if values.is_empty() {
            return;
        }
        self.append_str(method, Some(values.join(",").as_str()));
    }

    /// One string argument per value, in order.
    pub fn append_varargs(&mut self, method: &str, values: &[String]) {
        if values.is_empty() {
            return;
        }
        let slots = vec![SLOT; values.len()].join(",");
        let args = values.iter().cloned().map(Argument::Str).collect();
        self.fragments
            .push(Fragment::new(format!("\n.{}({})", method, slots), args));
    }

    /// Fixed text without arguments, e.g. `\n.endParam()`.
    pub fn push_literal(&mut self, template: impl Into<String>) {
        self.fragments.push(Fragment::literal(template));
    }

    /// Fixed text with arguments.
    pub fn push(&mut self, template: impl Into<String>, args: Vec<Argument>) {
        self.fragments.push(Fragment::new(template, args));
    }

    pub fn finish(self) -> GeneratedStatement {
        GeneratedStatement {
            fragments: self.fragments,
        }
    }
}
