//! Traits for code generation backends.

use crate::descriptor::{EnumDescriptor, EnumSchema};
use crate::error::GenerateError;
use crate::printer::Printer;

/// A code generation backend.
///
/// Backends turn enum descriptors into source code for a target language.
///
/// # Implementing Custom Backends
///
/// ```ignore
/// use protogen::{Backend, EnumDescriptor, GenerateError, Printer, register_backend};
///
/// struct MyBackend;
///
/// impl Backend for MyBackend {
///     fn name(&self) -> &'static str { "my-backend" }
///     fn language(&self) -> &'static str { "kotlin" }
///     fn extension(&self) -> &'static str { "kt" }
///     fn generate_enum(
///         &self,
///         desc: &dyn EnumDescriptor,
///         printer: &mut Printer,
///     ) -> Result<(), GenerateError> { /* ... */ }
/// }
///
/// // Register before first use
/// register_backend(&MyBackend);
/// ```
pub trait Backend: Send + Sync {
    /// Unique backend identifier (e.g., "rust").
    fn name(&self) -> &'static str;

    /// Target language (e.g., "rust").
    fn language(&self) -> &'static str;

    /// File extension for generated code (e.g., "rs").
    fn extension(&self) -> &'static str;

    /// Writes the definition of one enum to `printer`.
    ///
    /// On error, `printer` is left as it was.
    fn generate_enum(
        &self,
        desc: &dyn EnumDescriptor,
        printer: &mut Printer,
    ) -> Result<(), GenerateError>;

    /// Generates every enum in `schemas`, in order, into one source file.
    fn generate(&self, schemas: &[EnumSchema]) -> Result<String, GenerateError> {
        let mut printer = Printer::new();
        for schema in schemas {
            self.generate_enum(schema, &mut printer)?;
        }
        Ok(printer.into_string())
    }
}

impl<B: Backend + ?Sized> Backend for &B {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn language(&self) -> &'static str {
        (**self).language()
    }

    fn extension(&self) -> &'static str {
        (**self).extension()
    }

    fn generate_enum(
        &self,
        desc: &dyn EnumDescriptor,
        printer: &mut Printer,
    ) -> Result<(), GenerateError> {
        (**self).generate_enum(desc, printer)
    }

    fn generate(&self, schemas: &[EnumSchema]) -> Result<String, GenerateError> {
        (**self).generate(schemas)
    }
}
