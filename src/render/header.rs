//! C header with one `#define` per key.

use std::path::{Path, PathBuf};

use super::{emitted, RenderOptions, Renderer};
use crate::diag::Diagnostics;
use crate::registry::Registry;

pub struct HeaderRenderer {
    path: PathBuf,
    prefix: String,
    guard: String,
}

impl HeaderRenderer {
    pub fn new(path: impl Into<PathBuf>, options: &RenderOptions) -> Self {
        Self {
            path: path.into(),
            prefix: options.prefix.clone(),
            guard: options.guard.clone(),
        }
    }
}

impl Renderer for HeaderRenderer {
    fn path(&self) -> &Path {
        &self.path
    }

    fn render(&self, registry: &Registry, diag: &mut Diagnostics) -> String {
        let mut out = format!("#ifndef {guard}\n#define {guard} 1\n", guard = self.guard);
        for def in emitted(registry, diag) {
            out.push_str(&format!(
                "#define {}{} {}\n",
                self.prefix,
                def.define,
                def.value()
            ));
        }
        out.push_str("#endif\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::TypeTag;

    fn render(registry: &Registry, options: &RenderOptions) -> String {
        let mut diag = Diagnostics::silent();
        HeaderRenderer::new("config.h", options).render(registry, &mut diag)
    }

    #[test]
    fn test_empty_registry_has_guard_only() {
        let out = render(&Registry::new(), &RenderOptions::default());
        assert_eq!(out, "#ifndef __CONFIG_H__\n#define __CONFIG_H__ 1\n#endif\n");
    }

    #[test]
    fn test_every_type_in_order() {
        let mut registry = Registry::new();
        for (name, ty, text) in [
            ("NAME", TypeTag::String, "box"),
            ("OFFSET", TypeTag::Integer, "-4"),
            ("MASK", TypeTag::HexInteger, "0xff"),
            ("COUNT", TypeTag::UnsignedInteger, "12"),
            ("DEBUG", TypeTag::Boolean, "true"),
        ] {
            let def = registry.get_or_create(name);
            def.set_type(ty);
            def.define = name.to_string();
            def.assign(text).unwrap();
        }

        let out = render(&registry, &RenderOptions::default());
        assert_eq!(
            out,
            "#ifndef __CONFIG_H__\n\
             #define __CONFIG_H__ 1\n\
             #define CONFIG_NAME \"box\"\n\
             #define CONFIG_OFFSET -4\n\
             #define CONFIG_MASK 0xFF\n\
             #define CONFIG_COUNT 12\n\
             #define CONFIG_DEBUG 1\n\
             #endif\n"
        );
    }

    #[test]
    fn test_unresolved_string_renders_empty() {
        let mut registry = Registry::new();
        registry.get_or_create("NAME").define = "NAME".into();

        let out = render(&registry, &RenderOptions::default());
        assert!(out.contains("#define CONFIG_NAME \"\"\n"));
    }

    #[test]
    fn test_custom_prefix_and_guard() {
        let mut registry = Registry::new();
        let def = registry.get_or_create("PORT");
        def.define = "PORT".into();
        def.set_type(TypeTag::Integer);

        let options = RenderOptions {
            prefix: "BOARD_".into(),
            guard: "BOARD_CONFIG_H".into(),
        };
        let out = render(&registry, &options);
        assert!(out.starts_with("#ifndef BOARD_CONFIG_H\n#define BOARD_CONFIG_H 1\n"));
        assert!(out.contains("#define BOARD_PORT 0\n"));
    }
}
