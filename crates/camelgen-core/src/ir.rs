//! Backend-agnostic form of the generated route configuration.
//!
//! A [`GeneratedStatement`] is an ordered list of [`Fragment`]s. Each fragment
//! is a piece of template text where every `{}` marks one argument slot, plus
//! the typed [`Argument`]s filling those slots in order. Emitters decide how
//! each argument kind is written (quoting, escaping, type imports).

use serde::{Deserialize, Serialize};

/// Placeholder marking one argument slot inside a fragment template.
pub const SLOT: &str = "{}";

/// Host framework types referenced by generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HostType {
    RouteBuilder,
    RestDefinition,
    RestParamType,
    CollectionFormat,
}

impl HostType {
    pub fn simple_name(&self) -> &'static str {
        match self {
            HostType::RouteBuilder => "RouteBuilder",
            HostType::RestDefinition => "RestDefinition",
            HostType::RestParamType => "RestParamType",
            HostType::CollectionFormat => "CollectionFormat",
        }
    }

    pub fn package(&self) -> &'static str {
        match self {
            HostType::RouteBuilder => "org.apache.camel.builder",
            HostType::RestDefinition | HostType::RestParamType | HostType::CollectionFormat => {
                "org.apache.camel.model.rest"
            }
        }
    }

    /// Fully qualified name, e.g. `org.apache.camel.model.rest.RestDefinition`.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.package(), self.simple_name())
    }
}

/// One typed argument of a fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Argument {
    /// Inserted verbatim, e.g. `true`, `get`, `42`
    Literal(String),
    /// Written as a quoted and escaped string literal
    Str(String),
    /// Written as `Type.CONSTANT`
    EnumConstant { ty: HostType, constant: String },
    /// Written as the type's name
    Type(HostType),
}

impl Argument {
    /// Host type this argument needs in scope, if any.
    pub fn host_type(&self) -> Option<HostType> {
        match self {
            Argument::EnumConstant { ty, .. } | Argument::Type(ty) => Some(*ty),
            Argument::Literal(_) | Argument::Str(_) => None,
        }
    }
}

/// Template text plus the arguments for its slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    pub template: String,
    pub args: Vec<Argument>,
}

impl Fragment {
    pub fn new(template: impl Into<String>, args: Vec<Argument>) -> Self {
        Self {
            template: template.into(),
            args,
        }
    }

    /// A fragment without arguments.
    pub fn literal(template: impl Into<String>) -> Self {
        Self::new(template, Vec::new())
    }

    /// Substitute every slot with the rendering of the matching argument.
    ///
    /// Slots beyond the last argument are left as is and surplus arguments
    /// are ignored; fragments built by the route generator always match.
    pub fn render_with<F>(&self, mut render_arg: F) -> String
    where
        F: FnMut(&Argument) -> String,
    {
        let mut out = String::with_capacity(self.template.len());
        let mut args = self.args.iter();
        let mut rest = self.template.as_str();
        while let Some(pos) = rest.find(SLOT) {
            out.push_str(&rest[..pos]);
            match args.next() {
                Some(arg) => out.push_str(&render_arg(arg)),
                None => out.push_str(SLOT),
            }
            rest = &rest[pos + SLOT.len()..];
        }
        out.push_str(rest);
        out
    }
}

/// One builder call chain, e.g. one REST endpoint registration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedStatement {
    pub fragments: Vec<Fragment>,
}

impl GeneratedStatement {
    pub fn render_with<F>(&self, mut render_arg: F) -> String
    where
        F: FnMut(&Argument) -> String,
    {
        self.fragments
            .iter()
            .map(|fragment| fragment.render_with(&mut render_arg))
            .collect()
    }

    /// All arguments in emission order.
    pub fn arguments(&self) -> impl Iterator<Item = &Argument> {
        self.fragments.iter().flat_map(|f| f.args.iter())
    }

    /// Builder method names called by this statement, in order.
    ///
    /// `"\n.param()"` yields `param`, `"rest.{}({})"` yields nothing.
    pub fn method_names(&self) -> Vec<&str> {
        self.fragments
            .iter()
            .flat_map(|f| f.template.split('.').skip(1))
            .filter_map(|call| call.split('(').next())
            .map(str::trim)
            .filter(|name| name.starts_with(|c: char| c.is_ascii_alphabetic()))
            .collect()
    }
}

/// Everything an emitter needs to write one route builder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedArtifact {
    pub class_name: String,
    pub statements: Vec<GeneratedStatement>,
}
