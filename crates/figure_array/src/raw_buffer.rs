use std::iter;
use std::mem::MaybeUninit;

/// Owns `capacity` slots of storage without tracking which of them hold live values.
///
/// Dropping the buffer releases the storage but never drops a `T`; the owner is
/// responsible for the live prefix.
pub(crate) struct RawBuffer<T> {
    slots: Box<[MaybeUninit<T>]>,
}

impl<T> RawBuffer<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        RawBuffer {
            slots: iter::repeat_with(MaybeUninit::uninit)
                .take(capacity)
                .collect(),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn as_ptr(&self) -> *const T {
        // MaybeUninit<T> has the same layout as T
        self.slots.as_ptr() as *const T
    }

    pub(crate) fn as_mut_ptr(&mut self) -> *mut T {
        self.slots.as_mut_ptr() as *mut T
    }
}
