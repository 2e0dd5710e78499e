//! raw inline storage for at most one payload.
//!
//! `Slot<T>` is the untagged half of a `Unit | T` union. it never knows
//! whether it holds a live `T`; the owner keeps that tag and has to pass it
//! in through the safety contracts below.
use core::mem::ManuallyDrop;

pub(crate) union Slot<T> {
    #[allow(dead_code)]
    vacant: (),
    payload: ManuallyDrop<T>,
}

impl<T> Slot<T> {
    pub(crate) const fn vacant() -> Self {
        Slot { vacant: () }
    }

    pub(crate) const fn occupied(value: T) -> Self {
        Slot {
            payload: ManuallyDrop::new(value),
        }
    }

    /// Writes `value` into the slot and hands back a borrow of it.
    ///
    /// Whatever the slot held before is forgotten, not dropped.
    pub(crate) fn put(&mut self, value: T) -> &mut T {
        self.payload = ManuallyDrop::new(value);
        // SAFETY: the payload field was written on the line above.
        unsafe { &mut self.payload }
    }

    /// # Safety
    /// The slot must hold a live payload.
    pub(crate) const unsafe fn assume_ref(&self) -> &T {
        // SAFETY: the safety contract must be upheld by the caller, and
        // `ManuallyDrop<T>` has the same layout as `T`.
        unsafe { &*(&raw const self.payload).cast::<T>() }
    }

    /// # Safety
    /// The slot must hold a live payload.
    pub(crate) unsafe fn assume_mut(&mut self) -> &mut T {
        // SAFETY: the safety contract must be upheld by the caller.
        unsafe { &mut self.payload }
    }

    /// Moves the payload out bitwise.
    ///
    /// # Safety
    /// The slot must hold a live payload, and the caller must treat the slot
    /// as vacant afterwards.
    pub(crate) unsafe fn take(&mut self) -> T {
        // SAFETY: the slot holds a live payload.
        let payload = unsafe { &mut self.payload };
        // SAFETY: the caller never reads this payload again.
        unsafe { ManuallyDrop::take(payload) }
    }

    /// Drops the payload in place.
    ///
    /// # Safety
    /// The slot must hold a live payload, and the caller must treat the slot
    /// as vacant afterwards.
    pub(crate) unsafe fn drop_payload(&mut self) {
        // SAFETY: the slot holds a live payload.
        let payload = unsafe { &mut self.payload };
        // SAFETY: the caller never reads this payload again.
        unsafe { ManuallyDrop::drop(payload) };
    }
}
