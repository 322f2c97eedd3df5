//! End-to-end generation: load, assemble, emit.

use std::path::PathBuf;

use crate::config::Config;
use crate::emit::{write_artifact, ArtifactEmitter, JavaEmitter};
use crate::ir::GeneratedArtifact;
use crate::openapi::OpenApiContext;
use crate::restdsl;

/// Load the configured specification and assemble its route artifact.
pub async fn load_artifact(config: &Config) -> crate::Result<GeneratedArtifact> {
    config.validate()?;
    let context = OpenApiContext::from_file_or_url(&config.schema_path).await?;
    let spec = context.specification()?;
    log::info!(
        "Assembling {} operations across {} paths",
        spec.operation_count(),
        spec.paths.len()
    );
    Ok(restdsl::assemble(&spec))
}

/// Render the route builder source without writing it.
pub async fn render(config: &Config) -> crate::Result<String> {
    let artifact = load_artifact(config).await?;
    JavaEmitter::new(&config.package).render(&artifact)
}

/// Generate the route builder and write it below `config.output_dir`.
///
/// Returns the path of the written Java file.
pub async fn generate(config: &Config) -> crate::Result<PathBuf> {
    let artifact = load_artifact(config).await?;
    let emitter = JavaEmitter::new(&config.package);
    write_artifact(&emitter, &artifact, &config.output_dir).await
}
