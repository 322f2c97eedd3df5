//! Emission backends for generated route configurations.
//!
//! An [`ArtifactEmitter`] turns a [`GeneratedArtifact`] into source text and
//! decides where in an output tree that text belongs. [`write_artifact`]
//! performs the actual file I/O.

pub mod java;

use std::path::{Path, PathBuf};

use tokio::fs;

use crate::ir::GeneratedArtifact;

pub use java::JavaEmitter;

/// Renders an artifact for one target language.
pub trait ArtifactEmitter {
    /// Complete source text of the artifact.
    fn render(&self, artifact: &GeneratedArtifact) -> crate::Result<String>;

    /// Location of the rendered file, relative to the output directory.
    fn relative_path(&self, artifact: &GeneratedArtifact) -> PathBuf;
}

/// Render `artifact` and write it below `output_dir`, creating directories
/// as needed. Returns the path of the written file.
pub async fn write_artifact<E: ArtifactEmitter + ?Sized>(
    emitter: &E,
    artifact: &GeneratedArtifact,
    output_dir: impl AsRef<Path>,
) -> crate::Result<PathBuf> {
    let source = emitter.render(artifact)?;
    let target = output_dir.as_ref().join(emitter.relative_path(artifact));

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).await?;
    }
    fs::write(&target, source).await?;

    log::info!("Wrote {}", target.display());
    Ok(target)
}
