//! Ordered collection of key definitions.

use std::collections::HashMap;

use crate::value::{parse_value, TypeTag, Value, ValueError};

/// One configuration key as declared by the definition files.
#[derive(Debug, Clone, PartialEq)]
pub struct Definition {
    name: String,
    pub description: String,
    /// Macro name emitted by the renderers; empty means "do not emit".
    pub define: String,
    pub required: bool,
    /// Raw `value = ...` text from the definition files, if any.
    pub default_text: Option<String>,
    ty: TypeTag,
    value: Value,
    has_value: bool,
}

impl Definition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            define: String::new(),
            required: false,
            default_text: None,
            ty: TypeTag::default(),
            value: Value::default(),
            has_value: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> TypeTag {
        self.ty
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn has_value(&self) -> bool {
        self.has_value
    }

    /// Declare the type. A different type discards the current value.
    pub fn set_type(&mut self, ty: TypeTag) {
        if self.ty != ty {
            self.ty = ty;
            self.value = Value::empty(ty);
            self.has_value = false;
        }
    }

    /// Coerce `text` into the declared type and commit it on success.
    ///
    /// On failure the previous value and `has_value` are kept.
    pub fn assign(&mut self, text: &str) -> Result<(), ValueError> {
        let value = parse_value(text, self.ty)?;
        self.value = value;
        self.has_value = true;
        Ok(())
    }

    /// Drop the current value, back to the empty value of the declared type.
    pub fn clear_value(&mut self) {
        self.value = Value::empty(self.ty);
        self.has_value = false;
    }
}

/// Definitions in insertion order with a name index.
#[derive(Debug, Default)]
pub struct Registry {
    defs: Vec<Definition>,
    index: HashMap<String, usize>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the definition called `name`, appending a fresh one if needed.
    pub fn get_or_create(&mut self, name: &str) -> &mut Definition {
        let pos = match self.index.get(name) {
            Some(&pos) => pos,
            None => {
                self.defs.push(Definition::new(name));
                let pos = self.defs.len() - 1;
                self.index.insert(name.to_string(), pos);
                pos
            }
        };
        &mut self.defs[pos]
    }

    pub fn find(&self, name: &str) -> Option<&Definition> {
        self.index.get(name).map(|&pos| &self.defs[pos])
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Definition> {
        self.index.get(name).map(|&pos| &mut self.defs[pos])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Definition> {
        self.defs.iter()
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Definition;
    type IntoIter = std::slice::Iter<'a, Definition>;

    fn into_iter(self) -> Self::IntoIter {
        self.defs.iter()
    }
}
