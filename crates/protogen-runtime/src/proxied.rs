//! Scalar read and write access.

use crate::__internal::Private;

/// A field type reachable through a read-only view and a write handle.
///
/// Enums and 32-bit integers are their own views.
pub trait Proxied: Sized {
    /// Read-only handle.
    type View<'msg>: Copy;
    /// Write handle.
    type Mut<'msg>;
}

/// Shorthand for `<T as Proxied>::View<'msg>`.
pub type View<'msg, T> = <T as Proxied>::View<'msg>;

/// Shorthand for `<T as Proxied>::Mut<'msg>`.
pub type Mut<'msg, T> = <T as Proxied>::Mut<'msg>;

/// Conversion of a view into its owning type's view.
pub trait ViewProxy<'msg>: Sized {
    type Proxied: Proxied;

    fn as_view(&self) -> View<'_, Self::Proxied>;

    fn into_view<'shorter>(self) -> View<'shorter, Self::Proxied>
    where
        'msg: 'shorter;
}

/// A value that can be written through a write handle of `T`.
pub trait SettableValue<T: Proxied>: Sized {
    fn set_on<'msg>(self, private: Private, mutator: Mut<'msg, T>)
    where
        T: 'msg;
}

/// Write handle for a scalar slot.
#[derive(Debug)]
pub struct PrimitiveMut<'msg, T> {
    slot: &'msg mut T,
}

impl<'msg, T: Copy> PrimitiveMut<'msg, T> {
    pub fn new(slot: &'msg mut T) -> Self {
        Self { slot }
    }

    pub fn get(&self) -> T {
        *self.slot
    }

    pub fn set(&mut self, val: T) {
        *self.slot = val;
    }

    #[doc(hidden)]
    pub fn set_primitive(&mut self, _private: Private, val: T) {
        *self.slot = val;
    }
}

impl Proxied for i32 {
    type View<'msg> = i32;
    type Mut<'msg> = PrimitiveMut<'msg, i32>;
}

impl ViewProxy<'_> for i32 {
    type Proxied = i32;

    fn as_view(&self) -> i32 {
        *self
    }

    fn into_view<'shorter>(self) -> View<'shorter, i32> {
        self
    }
}

impl SettableValue<i32> for i32 {
    fn set_on<'msg>(self, private: Private, mut mutator: Mut<'msg, i32>)
    where
        i32: 'msg,
    {
        mutator.set_primitive(private, self)
    }
}
