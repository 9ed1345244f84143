//! Storage casts used by generated `ProxiedInRepeated` impls.

use crate::__internal::{Enum, Private};
use crate::repeated::{RepeatedMut, RepeatedView};

/// Views repeated enum storage as its backing `i32` storage.
pub fn cast_enum_repeated_view<E: Enum>(
    _private: Private,
    repeated: RepeatedView<'_, E>,
) -> RepeatedView<'_, i32> {
    RepeatedView::from_raw(repeated.raw())
}

/// Mutably views repeated enum storage as its backing `i32` storage.
pub fn cast_enum_repeated_mut<E: Enum>(
    _private: Private,
    repeated: RepeatedMut<'_, E>,
) -> RepeatedMut<'_, i32> {
    RepeatedMut::from_raw(repeated.into_raw())
}
