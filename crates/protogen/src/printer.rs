//! Output sink for generated code.

use crate::template::{Template, TemplateError, Vars};

/// Accumulates generated source text.
#[derive(Debug, Default)]
pub struct Printer {
    out: String,
}

impl Printer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders `template` with `vars` and appends the result.
    ///
    /// Nothing is appended if rendering fails.
    pub fn emit(&mut self, template: &Template, vars: &Vars) -> Result<(), TemplateError> {
        let rendered = template.render(vars)?;
        self.out.push_str(&rendered);
        Ok(())
    }

    /// Parses and renders `source`, then appends the result.
    pub fn emit_str(&mut self, source: &str, vars: &Vars) -> Result<(), TemplateError> {
        self.emit(&Template::parse(source)?, vars)
    }

    /// Appends raw text.
    pub fn write(&mut self, text: &str) {
        self.out.push_str(text);
    }

    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.out
    }

    pub fn into_string(self) -> String {
        self.out
    }
}
