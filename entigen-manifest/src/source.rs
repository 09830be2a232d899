use std::path::Path;

use entigen_ir::{EntityDescriptor, EntitySource, SourceError};

use crate::{EntigenToml, Manifest, Result};

/// An [`EntitySource`] backed by a validated manifest.
#[derive(Debug, Clone)]
pub struct ManifestSource {
    manifest: Manifest,
}

impl ManifestSource {
    pub fn new(manifest: Manifest) -> Self {
        Self { manifest }
    }

    /// Open and validate the manifest at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(EntigenToml::open(path)?.into_manifest()))
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }
}

impl EntitySource for ManifestSource {
    fn entities(&self) -> std::result::Result<Vec<EntityDescriptor>, SourceError> {
        Ok(self.manifest.descriptors())
    }
}
