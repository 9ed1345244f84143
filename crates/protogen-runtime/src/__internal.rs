//! Items named by generated code. Not part of the public API.

use std::fmt;

/// Token proving the caller is generated code or this crate.
#[derive(Debug, Clone, Copy)]
pub struct Private;

/// Marker for generated enum types.
///
/// # Safety
///
/// Implementors must be `#[repr(transparent)]` wrappers around an `i32`.
pub unsafe trait Enum: Copy + Default + fmt::Debug + Into<i32> + TryFrom<i32> {
    /// The generated type name.
    const NAME: &'static str;
}
