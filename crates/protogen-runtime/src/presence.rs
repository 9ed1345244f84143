//! Field presence.
//!
//! A field with presence is either absent, in which case reads fall back to
//! the type's default, or present with an explicitly set value. Moving
//! between the two states goes through [`ProxiedWithPresence`].

use crate::__internal::Private;
use crate::proxied::Proxied;

/// A field type that tracks whether it has been explicitly set.
pub trait ProxiedWithPresence: Proxied {
    /// Handle to a field that is currently set.
    type PresentMutData<'msg>;
    /// Handle to a field that is currently unset.
    type AbsentMutData<'msg>;

    /// Clears a set field, leaving it absent.
    fn clear_present_field(present_mutator: Self::PresentMutData<'_>) -> Self::AbsentMutData<'_>;

    /// Marks an absent field as set to its default value.
    fn set_absent_to_default(
        absent_mutator: Self::AbsentMutData<'_>,
    ) -> Self::PresentMutData<'_>;
}

/// Either state of a field with presence.
pub enum FieldEntry<'msg, T: ProxiedWithPresence> {
    Present(T::PresentMutData<'msg>),
    Absent(T::AbsentMutData<'msg>),
}

impl<'msg, T: ProxiedWithPresence> FieldEntry<'msg, T> {
    pub fn is_present(&self) -> bool {
        matches!(self, FieldEntry::Present(_))
    }

    /// Moves the field to the absent state.
    pub fn clear(self) -> Self {
        match self {
            FieldEntry::Present(present) => FieldEntry::Absent(T::clear_present_field(present)),
            absent => absent,
        }
    }

    /// Moves the field to the present state, setting the default if it was
    /// absent.
    pub fn or_default(self) -> T::PresentMutData<'msg> {
        match self {
            FieldEntry::Present(present) => present,
            FieldEntry::Absent(absent) => T::set_absent_to_default(absent),
        }
    }
}

/// Storage for a scalar field with presence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptionalField<T> {
    value: T,
    present: bool,
}

impl<T: Copy + Default> OptionalField<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The set value, or the default when absent.
    pub fn get(&self) -> T {
        if self.present {
            self.value
        } else {
            T::default()
        }
    }

    pub fn is_present(&self) -> bool {
        self.present
    }

    pub fn set(&mut self, val: T) {
        self.value = val;
        self.present = true;
    }

    pub fn clear(&mut self) {
        self.value = T::default();
        self.present = false;
    }

    pub fn mutator(&mut self) -> OptionalMutatorData<'_, T> {
        OptionalMutatorData { field: self }
    }

    /// Borrows the field as a [`FieldEntry`] reflecting its current state.
    pub fn entry<'msg>(&'msg mut self) -> FieldEntry<'msg, T>
    where
        T: ProxiedWithPresence<
                PresentMutData<'msg> = OptionalMutatorData<'msg, T>,
                AbsentMutData<'msg> = OptionalMutatorData<'msg, T>,
            >,
    {
        let present = self.present;
        let data = self.mutator();
        if present {
            FieldEntry::Present(data)
        } else {
            FieldEntry::Absent(data)
        }
    }
}

/// Presence handle over an [`OptionalField`], used for both states.
#[derive(Debug)]
pub struct OptionalMutatorData<'msg, T> {
    field: &'msg mut OptionalField<T>,
}

impl<'msg, T: Copy + Default> OptionalMutatorData<'msg, T> {
    pub fn is_present(&self) -> bool {
        self.field.present
    }

    pub fn get(&self) -> T {
        self.field.get()
    }

    pub fn set(&mut self, val: T) {
        self.field.set(val);
    }

    #[doc(hidden)]
    pub fn clear(self, _private: Private) -> Self {
        self.field.clear();
        self
    }

    #[doc(hidden)]
    pub fn set_absent_to_default(self, _private: Private) -> Self {
        self.field.set(T::default());
        self
    }
}

impl ProxiedWithPresence for i32 {
    type PresentMutData<'msg> = OptionalMutatorData<'msg, i32>;
    type AbsentMutData<'msg> = OptionalMutatorData<'msg, i32>;

    fn clear_present_field(present_mutator: Self::PresentMutData<'_>) -> Self::AbsentMutData<'_> {
        present_mutator.clear(Private)
    }

    fn set_absent_to_default(
        absent_mutator: Self::AbsentMutData<'_>,
    ) -> Self::PresentMutData<'_> {
        absent_mutator.set_absent_to_default(Private)
    }
}
