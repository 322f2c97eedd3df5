//! Java source backend producing a Camel `RouteBuilder` subclass.

use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::Serialize;
use tera::{Context, Tera};

use super::ArtifactEmitter;
use crate::ir::{Argument, GeneratedArtifact, GeneratedStatement, HostType};

const TEMPLATE_NAME: &str = "RouteBuilder.java";
const TEMPLATE: &str = include_str!("../../templates/RouteBuilder.java.tera");

const STATEMENT_INDENT: &str = "        ";
const CONTINUATION_INDENT: &str = "            ";

/// Writes artifacts as `<package>/<ClassName>.java`.
#[derive(Debug, Clone, Default)]
pub struct JavaEmitter {
    /// Dotted package name; empty for the default package
    pub package: String,
}

#[derive(Serialize)]
struct ClassContext<'a> {
    package: &'a str,
    imports: Vec<String>,
    class_name: &'a str,
    statements: Vec<String>,
}

impl JavaEmitter {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
        }
    }

    /// Java source text of one argument.
    pub fn render_argument(arg: &Argument) -> String {
        match arg {
            Argument::Literal(text) => text.clone(),
            Argument::Str(text) => string_literal(text),
            Argument::EnumConstant { ty, constant } => format!("{}.{}", ty.simple_name(), constant),
            Argument::Type(ty) => ty.simple_name().to_string(),
        }
    }

    /// One statement, indented for the body of `configure()`, without the
    /// trailing semicolon.
    pub fn render_statement(statement: &GeneratedStatement) -> String {
        let text = statement.render_with(Self::render_argument);
        let continuation = format!("\n{}", CONTINUATION_INDENT);
        format!("{}{}", STATEMENT_INDENT, text.replace('\n', &continuation))
    }

    /// Sorted fully qualified imports needed by the artifact.
    pub fn imports(artifact: &GeneratedArtifact) -> Vec<String> {
        let mut types = BTreeSet::new();
        types.insert(HostType::RouteBuilder.qualified_name());
        for statement in &artifact.statements {
            for ty in statement.arguments().filter_map(Argument::host_type) {
                types.insert(ty.qualified_name());
            }
        }
        types.into_iter().collect()
    }
}

impl ArtifactEmitter for JavaEmitter {
    fn render(&self, artifact: &GeneratedArtifact) -> crate::Result<String> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, TEMPLATE)?;

        let class = ClassContext {
            package: &self.package,
            imports: Self::imports(artifact),
            class_name: &artifact.class_name,
            statements: artifact
                .statements
                .iter()
                .map(Self::render_statement)
                .collect(),
        };
        let context = Context::from_serialize(&class)?;
        let mut source = tera.render(TEMPLATE_NAME, &context)?;
        if !source.ends_with('\n') {
            source.push('\n');
        }
        Ok(source)
    }

    fn relative_path(&self, artifact: &GeneratedArtifact) -> PathBuf {
        let mut path: PathBuf = self
            .package
            .split('.')
            .filter(|segment| !segment.is_empty())
            .collect();
        path.push(format!("{}.java", artifact.class_name));
        path
    }
}

/// Quote and escape `text` as a Java string literal.
pub fn string_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
