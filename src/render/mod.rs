//! Artifact renderers.
//!
//! Both renderers walk the registry in declaration order and emit one
//! binding per definition that has a `define` name.

mod header;
mod makefile;

pub use header::HeaderRenderer;
pub use makefile::MakefileRenderer;

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::diag::Diagnostics;
use crate::registry::{Definition, Registry};

pub const DEFAULT_PREFIX: &str = "CONFIG_";
pub const DEFAULT_GUARD: &str = "__CONFIG_H__";

/// Naming knobs shared by the renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Prepended to every `define` name
    pub prefix: String,
    /// Include guard macro of the C header
    pub guard: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            guard: DEFAULT_GUARD.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Header,
    Makefile,
}

/// One requested output file. Artifacts are generated in the order given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub path: PathBuf,
}

impl Artifact {
    pub fn header(path: impl Into<PathBuf>) -> Self {
        Self {
            kind: ArtifactKind::Header,
            path: path.into(),
        }
    }

    pub fn makefile(path: impl Into<PathBuf>) -> Self {
        Self {
            kind: ArtifactKind::Makefile,
            path: path.into(),
        }
    }

    pub fn renderer(&self, options: &RenderOptions) -> Box<dyn Renderer> {
        match self.kind {
            ArtifactKind::Header => Box::new(HeaderRenderer::new(&self.path, options)),
            ArtifactKind::Makefile => Box::new(MakefileRenderer::new(&self.path, options)),
        }
    }
}

pub trait Renderer {
    /// Output file this renderer writes to.
    fn path(&self) -> &Path;

    /// Produce the full artifact text.
    fn render(&self, registry: &Registry, diag: &mut Diagnostics) -> String;

    /// Create the output file and write the artifact into it.
    ///
    /// Failures are reported as warnings and yield `false`; they never
    /// abort the run.
    fn generate(&self, registry: &Registry, diag: &mut Diagnostics) -> bool {
        let path = self.path();
        let source = path.display().to_string();

        let mut file = match File::create(path) {
            Ok(file) => file,
            Err(e) => {
                diag.warn(source, format!("unable to open file: {e}"));
                return false;
            }
        };

        let text = self.render(registry, diag);
        if let Err(e) = file.write_all(text.as_bytes()) {
            diag.warn(source, format!("unable to write file: {e}"));
            return false;
        }
        true
    }
}

/// Definitions that can be emitted; the rest are reported and skipped.
fn emitted<'a>(
    registry: &'a Registry,
    diag: &'a mut Diagnostics,
) -> impl Iterator<Item = &'a Definition> + 'a {
    registry.iter().filter(move |def| {
        if def.define.is_empty() {
            diag.warn(def.name(), "no definition string");
            false
        } else {
            true
        }
    })
}
