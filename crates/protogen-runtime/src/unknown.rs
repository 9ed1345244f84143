use crate::__internal::{Enum, Private};
use std::fmt;
use std::marker::PhantomData;

/// A closed enum was asked to represent a number it does not declare.
///
/// Returned by the `TryFrom<i32>` impl of every generated closed enum. The
/// rejected number is kept for diagnostics.
pub struct UnknownEnumValue<T>(i32, PhantomData<T>);

impl<T> UnknownEnumValue<T> {
    #[doc(hidden)]
    pub fn new(_private: Private, unknown_value: i32) -> Self {
        Self(unknown_value, PhantomData)
    }

    /// The number that was rejected.
    pub fn number(&self) -> i32 {
        self.0
    }
}

impl<T> fmt::Debug for UnknownEnumValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UnknownEnumValue").field(&self.0).finish()
    }
}

impl<T: Enum> fmt::Display for UnknownEnumValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is not a known value of {}", self.0, T::NAME)
    }
}

impl<T: Enum> std::error::Error for UnknownEnumValue<T> {}

impl<T> Clone for UnknownEnumValue<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for UnknownEnumValue<T> {}

impl<T> PartialEq for UnknownEnumValue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for UnknownEnumValue<T> {}
