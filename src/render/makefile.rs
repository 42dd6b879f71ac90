//! Makefile fragment with one `NAME := value` per key.

use std::path::{Path, PathBuf};

use super::{emitted, RenderOptions, Renderer};
use crate::diag::Diagnostics;
use crate::registry::Registry;

pub struct MakefileRenderer {
    path: PathBuf,
    prefix: String,
}

impl MakefileRenderer {
    pub fn new(path: impl Into<PathBuf>, options: &RenderOptions) -> Self {
        Self {
            path: path.into(),
            prefix: options.prefix.clone(),
        }
    }
}

impl Renderer for MakefileRenderer {
    fn path(&self) -> &Path {
        &self.path
    }

    fn render(&self, registry: &Registry, diag: &mut Diagnostics) -> String {
        let mut out = String::new();
        for def in emitted(registry, diag) {
            out.push_str(&format!("{}{} := {}\n", self.prefix, def.define, def.value()));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::TypeTag;

    #[test]
    fn test_assignments_without_guard() {
        let mut registry = Registry::new();
        let port = registry.get_or_create("PORT");
        port.set_type(TypeTag::Integer);
        port.define = "PORT".into();
        port.assign("8080").unwrap();
        let flag = registry.get_or_create("FAST");
        flag.set_type(TypeTag::Boolean);
        flag.define = "FAST".into();

        let mut diag = Diagnostics::silent();
        let out = MakefileRenderer::new("config.mk", &RenderOptions::default())
            .render(&registry, &mut diag);

        assert_eq!(out, "CONFIG_PORT := 8080\nCONFIG_FAST := 0\n");
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_skips_missing_define() {
        let mut registry = Registry::new();
        registry.get_or_create("ANON").assign("x").unwrap();

        let mut diag = Diagnostics::silent();
        let out = MakefileRenderer::new("config.mk", &RenderOptions::default())
            .render(&registry, &mut diag);

        assert!(out.is_empty());
        assert_eq!(diag.warnings()[0].source, "ANON");
    }
}
