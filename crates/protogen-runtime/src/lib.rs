//! Runtime support for enums generated by `protogen`.
//!
//! Every generated enum is a `#[repr(transparent)]` wrapper around an `i32`
//! and implements the same fixed protocol:
//!
//! ```text
//! Concern              Trait(s)
//! ─────────────────    ──────────────────────────────────
//! Scalar read          Proxied, ViewProxy
//! Scalar write         SettableValue (via PrimitiveMut)
//! Presence             ProxiedWithPresence (FieldEntry, OptionalField)
//! Repeated storage     ProxiedInRepeated (Repeated, RepeatedView, RepeatedMut)
//! Type identity        __internal::Enum
//! ```
//!
//! Closed enums convert from `i32` with `TryFrom`, failing with
//! [`UnknownEnumValue`]; open enums convert with `From` and keep any number.
//!
//! The `__internal` and `__runtime` modules are only meant to be named by
//! generated code.

pub mod presence;
pub mod proxied;
pub mod repeated;
mod unknown;

#[doc(hidden)]
pub mod __internal;
#[doc(hidden)]
pub mod __runtime;

pub use presence::{FieldEntry, OptionalField, OptionalMutatorData, ProxiedWithPresence};
pub use proxied::{Mut, PrimitiveMut, Proxied, SettableValue, View, ViewProxy};
pub use repeated::{ProxiedInRepeated, Repeated, RepeatedIter, RepeatedMut, RepeatedView};
pub use unknown::UnknownEnumValue;
