//! camelgen Core Library
//!
//! This library turns a Swagger 2.0 specification into the source of an
//! Apache Camel `RouteBuilder` whose `configure()` method registers every
//! operation through the REST DSL.
//!
//! The pipeline is:
//! 1. Load: Swagger JSON/YAML -> [`model::Specification`] ([`openapi`])
//! 2. Assemble: Specification -> [`ir::GeneratedArtifact`] ([`restdsl`])
//! 3. Emit: GeneratedArtifact -> Java source file ([`emit`])

pub mod config;
pub mod emit;
pub mod error;
pub mod generate;
pub mod ir;
pub mod model;
pub mod openapi;
pub mod restdsl;

pub use crate::{
    config::Config,
    emit::{ArtifactEmitter, JavaEmitter},
    error::{Error, Result},
    generate::{generate, render},
    ir::{Argument, Fragment, GeneratedArtifact, GeneratedStatement, HostType},
    model::Specification,
    openapi::OpenApiContext,
    restdsl::{assemble, ConfigurationAssembler, ProcessorNaming},
};
