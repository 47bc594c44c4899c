//! An ordered, index-addressable, growable array that owns its elements and can total
//! their areas when the element type converts into one.

use std::fmt::{Debug, Display, Formatter};
use std::io;
use std::ops::{Index, IndexMut};
use std::{ptr, slice};

use log::{debug, trace};

mod error;
pub use error::FigureArrayError;

mod raw_buffer;
use raw_buffer::RawBuffer;

pub const INITIAL_CAPACITY: usize = 4;

/// Anything that converts into an `f64` area: figures, and plain numbers standing for an
/// area they already measured.
pub trait HasArea {
    fn as_area(&self) -> f64;
}

macro_rules! impl_has_area_for_primitive {
    ($($t:ty),*) => {
        $(
            impl HasArea for $t {
                fn as_area(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}
impl_has_area_for_primitive!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// Live elements occupy `[0, len)` of the buffer; every slot past that is uninitialized.
///
/// Capacity starts at [`INITIAL_CAPACITY`], doubles whenever an insertion finds the buffer
/// full, and only shrinks through [`FigureArray::shrink_to_fit`]. `extend` grows along the
/// same doubling sequence up front; only [`FigureArray::reserve`] picks an exact capacity.
pub struct FigureArray<T> {
    buf: RawBuffer<T>,
    len: usize,
}

impl<T> FigureArray<T> {
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        FigureArray {
            buf: RawBuffer::with_capacity(capacity.max(INITIAL_CAPACITY)),
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Places `value` at `pos`, shifting everything from `pos` onward one slot toward the end.
    ///
    /// `pos` may equal `len()`. On error nothing changes.
    pub fn insert(&mut self, pos: usize, value: T) -> Result<(), FigureArrayError> {
        self.check_position("insert", pos)?;
        self.insert_unchecked(pos, value);
        Ok(())
    }

    /// Like [`insert`](Self::insert), but clones `value` first. A panicking clone leaves the
    /// array untouched.
    pub fn insert_cloned(&mut self, pos: usize, value: &T) -> Result<(), FigureArrayError>
    where
        T: Clone,
    {
        self.check_position("insert", pos)?;
        let value = value.clone();
        self.insert_unchecked(pos, value);
        Ok(())
    }

    pub fn push_back(&mut self, value: T) {
        self.insert_unchecked(self.len, value);
    }

    pub fn push_back_cloned(&mut self, value: &T)
    where
        T: Clone,
    {
        self.push_back(value.clone());
    }

    /// Drops the element at `index` and closes the gap.
    pub fn erase(&mut self, index: usize) -> Result<(), FigureArrayError> {
        // the array is consistent again before the element's destructor runs
        self.remove_with("erase", index).map(drop)
    }

    /// Takes the element at `index` out of the array and closes the gap.
    pub fn remove(&mut self, index: usize) -> Result<T, FigureArrayError> {
        self.remove_with("remove", index)
    }

    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: the slot at the old `len - 1` was live and is now outside the live prefix
        Some(unsafe { ptr::read(self.buf.as_ptr().add(self.len)) })
    }

    pub fn get(&self, index: usize) -> Result<&T, FigureArrayError> {
        self.check_index("get", index)?;
        Ok(&self.as_slice()[index])
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, FigureArrayError> {
        self.check_index("get_mut", index)?;
        Ok(&mut self.as_mut_slice()[index])
    }

    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[0, len)` is initialized and owned by `self`
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: `[0, len)` is initialized and owned by `self`
        unsafe { slice::from_raw_parts_mut(self.buf.as_mut_ptr(), self.len) }
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Drops every element. Capacity is kept.
    pub fn clear(&mut self) {
        let live = ptr::slice_from_raw_parts_mut(self.buf.as_mut_ptr(), self.len);
        // a panicking destructor can leak the rest, but never drop anything twice
        self.len = 0;
        // SAFETY: `live` covered exactly the initialized prefix, which no longer belongs to `self`
        unsafe { ptr::drop_in_place(live) }
    }

    /// Grows the storage to exactly `new_capacity` slots if that is more than it has now.
    pub fn reserve(&mut self, new_capacity: usize) {
        if new_capacity > self.capacity() {
            self.relocate(new_capacity);
        }
    }

    pub fn shrink_to_fit(&mut self) {
        let target = self.len.max(INITIAL_CAPACITY);
        if target < self.capacity() {
            trace!("shrinking figure array from {} to {} slots", self.capacity(), target);
            self.relocate(target);
        }
    }

    /// Sum of every element's area, left to right. Exactly `0.0` when empty.
    ///
    /// Only available for element types that convert into an area:
    ///
    /// ```compile_fail
    /// use figure_array::FigureArray;
    ///
    /// let names: FigureArray<String> = FigureArray::new();
    /// names.total_area();
    /// ```
    pub fn total_area(&self) -> f64
    where
        T: HasArea,
    {
        self.iter().fold(0.0, |total, item| total + item.as_area())
    }

    /// Writes every element on its own line, in index order.
    pub fn print_all<W: io::Write>(&self, sink: &mut W) -> io::Result<()>
    where
        T: Display,
    {
        for item in self.iter() {
            writeln!(sink, "{item}")?;
        }
        Ok(())
    }

    fn insert_unchecked(&mut self, pos: usize, value: T) {
        debug_assert!(pos <= self.len);
        if self.len == self.capacity() {
            self.relocate(self.grown_capacity());
        }
        // SAFETY: there is at least one free slot past the live prefix, so shifting
        // `[pos, len)` up by one stays in bounds and leaves `pos` free to overwrite
        unsafe {
            let slot = self.buf.as_mut_ptr().add(pos);
            ptr::copy(slot, slot.add(1), self.len - pos);
            ptr::write(slot, value);
        }
        self.len += 1;
    }

    fn remove_with(&mut self, operation: &'static str, index: usize) -> Result<T, FigureArrayError> {
        self.check_index(operation, index)?;
        // SAFETY: `index < len`; the read moves the element out and the copy overwrites its
        // slot with the tail, leaving the old last slot as a stale duplicate outside the prefix
        let removed = unsafe {
            let slot = self.buf.as_mut_ptr().add(index);
            let removed = ptr::read(slot);
            ptr::copy(slot.add(1), slot, self.len - index - 1);
            removed
        };
        self.len -= 1;
        Ok(removed)
    }

    fn grown_capacity(&self) -> usize {
        self.capacity().saturating_mul(2).max(INITIAL_CAPACITY)
    }

    /// Smallest capacity on the doubling sequence from the current one that holds `wanted`
    /// elements, or `None` if that sequence overflows first.
    fn doubled_capacity_covering(&self, wanted: usize) -> Option<usize> {
        let mut capacity = self.capacity().max(INITIAL_CAPACITY);
        while capacity < wanted {
            capacity = capacity.checked_mul(2)?;
        }
        Some(capacity)
    }

    /// Moves the live elements into fresh storage of `new_capacity` slots.
    fn relocate(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity >= self.len);
        let mut storage = RawBuffer::with_capacity(new_capacity);
        // SAFETY: both buffers hold at least `len` slots and are distinct allocations
        unsafe {
            ptr::copy_nonoverlapping(self.buf.as_ptr(), storage.as_mut_ptr(), self.len);
        }
        debug!(
            "figure array storage relocated: {} -> {} slots",
            self.capacity(),
            new_capacity
        );
        // the old buffer only releases its storage; the moved elements now live in `storage`
        self.buf = storage;
    }

    fn check_position(&self, operation: &'static str, pos: usize) -> Result<(), FigureArrayError> {
        if pos > self.len {
            return Err(FigureArrayError::OutOfRange {
                operation,
                index: pos,
                len: self.len,
            });
        }
        Ok(())
    }

    fn check_index(&self, operation: &'static str, index: usize) -> Result<(), FigureArrayError> {
        if index >= self.len {
            return Err(FigureArrayError::OutOfRange {
                operation,
                index,
                len: self.len,
            });
        }
        Ok(())
    }
}

impl<T> Default for FigureArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for FigureArray<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for FigureArray<T> {
    fn clone(&self) -> Self {
        // if an element clone panics, the partial copy drops its own elements
        let mut copy = Self::with_capacity(self.capacity());
        for item in self.iter() {
            copy.push_back(item.clone());
        }
        copy
    }
}

impl<T: PartialEq> PartialEq for FigureArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for FigureArray<T> {}

impl<T: Debug> Debug for FigureArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Display> Display for FigureArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for item in self.iter() {
            writeln!(f, "{item}")?;
        }
        Ok(())
    }
}

impl<T> Index<usize> for FigureArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(item) => item,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<T> IndexMut<usize> for FigureArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(item) => item,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<'a, T> IntoIterator for &'a FigureArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut FigureArray<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> Extend<T> for FigureArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        if let Some(capacity) = self
            .len
            .checked_add(iter.size_hint().0)
            .and_then(|wanted| self.doubled_capacity_covering(wanted))
        {
            self.reserve(capacity);
        }
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for FigureArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}
