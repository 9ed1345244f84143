//! Repeated field storage.
//!
//! Repeated enum fields share the storage of repeated `i32` fields; the
//! generated [`ProxiedInRepeated`] impls reinterpret one as the other.

use crate::proxied::{Proxied, View};
use std::fmt;
use std::marker::PhantomData;

/// Element types that can live in a [`Repeated`] container.
///
/// # Safety
///
/// Implementors must be representable as an `i32` element of the backing
/// storage.
pub unsafe trait ProxiedInRepeated: Proxied {
    fn repeated_len(r: RepeatedView<'_, Self>) -> usize;

    fn repeated_push(r: RepeatedMut<'_, Self>, val: Self);

    fn repeated_clear(r: RepeatedMut<'_, Self>);

    /// # Safety
    ///
    /// `index` must be less than the container's length.
    unsafe fn repeated_get_unchecked(r: RepeatedView<'_, Self>, index: usize) -> View<'_, Self>;

    /// # Safety
    ///
    /// `index` must be less than the container's length.
    unsafe fn repeated_set_unchecked(r: RepeatedMut<'_, Self>, index: usize, val: Self);

    /// Replaces the contents of `dest` with the contents of `src`.
    fn repeated_copy_from(src: RepeatedView<'_, Self>, dest: RepeatedMut<'_, Self>);
}

/// An owned repeated field.
pub struct Repeated<T> {
    values: Vec<i32>,
    _phantom: PhantomData<fn() -> T>,
}

impl<T> Default for Repeated<T> {
    fn default() -> Self {
        Self {
            values: Vec::new(),
            _phantom: PhantomData,
        }
    }
}

impl<T> fmt::Debug for Repeated<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.values).finish()
    }
}

impl<T: ProxiedInRepeated> Repeated<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_view(&self) -> RepeatedView<'_, T> {
        RepeatedView::from_raw(&self.values)
    }

    pub fn as_mut(&mut self) -> RepeatedMut<'_, T> {
        RepeatedMut::from_raw(&mut self.values)
    }

    pub fn len(&self) -> usize {
        self.as_view().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: ProxiedInRepeated> Proxied for Repeated<T> {
    type View<'msg> = RepeatedView<'msg, T>;
    type Mut<'msg> = RepeatedMut<'msg, T>;
}

/// Read-only view of a repeated field.
pub struct RepeatedView<'msg, T> {
    raw: &'msg [i32],
    _phantom: PhantomData<fn() -> T>,
}

impl<T> Clone for RepeatedView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RepeatedView<'_, T> {}

impl<T> fmt::Debug for RepeatedView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.raw).finish()
    }
}

impl<'msg, T> RepeatedView<'msg, T> {
    pub(crate) fn from_raw(raw: &'msg [i32]) -> Self {
        Self {
            raw,
            _phantom: PhantomData,
        }
    }

    pub(crate) fn raw(self) -> &'msg [i32] {
        self.raw
    }
}

impl<'msg, T: ProxiedInRepeated> RepeatedView<'msg, T> {
    pub fn len(self) -> usize {
        T::repeated_len(self)
    }

    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Returns the element at `index`, or `None` if out of bounds.
    pub fn get(self, index: usize) -> Option<View<'msg, T>> {
        if index >= self.len() {
            return None;
        }
        // SAFETY: `index` was checked against the length above.
        Some(unsafe { T::repeated_get_unchecked(self, index) })
    }

    /// # Safety
    ///
    /// `index` must be less than `self.len()`.
    pub unsafe fn get_unchecked(self, index: usize) -> View<'msg, T> {
        // SAFETY: in-bounds as promised by the caller.
        unsafe { T::repeated_get_unchecked(self, index) }
    }

    pub fn iter(self) -> RepeatedIter<'msg, T> {
        RepeatedIter {
            view: self,
            index: 0,
        }
    }
}

impl<'msg, T: ProxiedInRepeated> IntoIterator for RepeatedView<'msg, T> {
    type Item = View<'msg, T>;
    type IntoIter = RepeatedIter<'msg, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the elements of a [`RepeatedView`].
pub struct RepeatedIter<'msg, T> {
    view: RepeatedView<'msg, T>,
    index: usize,
}

impl<'msg, T: ProxiedInRepeated> Iterator for RepeatedIter<'msg, T> {
    type Item = View<'msg, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.view.get(self.index)?;
        self.index += 1;
        Some(item)
    }
}

/// Mutable handle to a repeated field.
pub struct RepeatedMut<'msg, T> {
    raw: &'msg mut Vec<i32>,
    _phantom: PhantomData<fn() -> T>,
}

impl<T> fmt::Debug for RepeatedMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.raw.iter()).finish()
    }
}

impl<'msg, T> RepeatedMut<'msg, T> {
    pub(crate) fn from_raw(raw: &'msg mut Vec<i32>) -> Self {
        Self {
            raw,
            _phantom: PhantomData,
        }
    }

    pub(crate) fn into_raw(self) -> &'msg mut Vec<i32> {
        self.raw
    }
}

impl<'msg, T: ProxiedInRepeated> RepeatedMut<'msg, T> {
    pub fn as_view(&self) -> RepeatedView<'_, T> {
        RepeatedView::from_raw(self.raw.as_slice())
    }

    /// Reborrows the handle for a shorter lifetime.
    pub fn as_mut(&mut self) -> RepeatedMut<'_, T> {
        RepeatedMut::from_raw(&mut *self.raw)
    }

    pub fn len(&self) -> usize {
        self.as_view().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: usize) -> Option<View<'_, T>> {
        self.as_view().get(index)
    }

    pub fn push(&mut self, val: T) {
        T::repeated_push(self.as_mut(), val)
    }

    pub fn clear(&mut self) {
        T::repeated_clear(self.as_mut())
    }

    /// Replaces the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn set(&mut self, index: usize, val: T) {
        let len = self.len();
        assert!(
            index < len,
            "index {index} out of bounds for repeated field of length {len}"
        );
        // SAFETY: `index` was checked against the length above.
        unsafe { T::repeated_set_unchecked(self.as_mut(), index, val) }
    }

    /// # Safety
    ///
    /// `index` must be less than `self.len()`.
    pub unsafe fn set_unchecked(&mut self, index: usize, val: T) {
        // SAFETY: in-bounds as promised by the caller.
        unsafe { T::repeated_set_unchecked(self.as_mut(), index, val) }
    }

    /// Replaces the contents of this field with those of `src`.
    pub fn copy_from(&mut self, src: RepeatedView<'_, T>) {
        T::repeated_copy_from(src, self.as_mut())
    }
}

// SAFETY: `i32` is the element type of the backing storage.
unsafe impl ProxiedInRepeated for i32 {
    fn repeated_len(r: RepeatedView<'_, i32>) -> usize {
        r.raw().len()
    }

    fn repeated_push(r: RepeatedMut<'_, i32>, val: i32) {
        r.into_raw().push(val)
    }

    fn repeated_clear(r: RepeatedMut<'_, i32>) {
        r.into_raw().clear()
    }

    unsafe fn repeated_get_unchecked(r: RepeatedView<'_, i32>, index: usize) -> View<'_, i32> {
        // SAFETY: in-bounds as promised by the caller.
        unsafe { *r.raw().get_unchecked(index) }
    }

    unsafe fn repeated_set_unchecked(r: RepeatedMut<'_, i32>, index: usize, val: i32) {
        // SAFETY: in-bounds as promised by the caller.
        unsafe { *r.into_raw().get_unchecked_mut(index) = val }
    }

    fn repeated_copy_from(src: RepeatedView<'_, i32>, dest: RepeatedMut<'_, i32>) {
        let dest = dest.into_raw();
        dest.clear();
        dest.extend_from_slice(src.raw());
    }
}
