use crate::BadOptionalAccess;
use crate::storage::Slot;
#[cfg(feature = "log")]
use core::any;
use core::fmt;
use core::hint;
use core::mem;
use core::ops::Deref;
use core::ops::DerefMut;

/// Zero or one `T`, stored inline.
///
/// The payload sits in a raw slot sized and aligned for `T`; `engaged` says
/// whether that slot currently holds a live value. No niche of `T` is used,
/// so every `T` works, including ones without a default or "null" state.
///
/// ```
/// use inline_optional::{BadOptionalAccess, Optional};
///
/// let mut name: Optional<String> = Optional::new();
/// assert_eq!(name.value(), Err(BadOptionalAccess));
///
/// name.emplace_with(|| String::from("ferris"));
/// name.push_str(" the crab");
/// assert_eq!(name.value().map(String::as_str), Ok("ferris the crab"));
///
/// name.reset();
/// assert!(!name.has_value());
/// ```
pub struct Optional<T> {
    slot: Slot<T>,
    // true iff `slot` holds a live payload
    engaged: bool,
}

impl<T> Optional<T> {
    #[must_use]
    pub const fn new() -> Self {
        Optional {
            slot: Slot::vacant(),
            engaged: false,
        }
    }

    #[must_use]
    pub const fn new_engaged(value: T) -> Self {
        Optional {
            slot: Slot::occupied(value),
            engaged: true,
        }
    }

    #[must_use]
    pub const fn has_value(&self) -> bool {
        self.engaged
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !self.engaged
    }

    /// Borrows the payload without checking that there is one.
    ///
    /// # Safety
    /// The container must be engaged. Calling this on an empty container is
    /// undefined behavior; only debug builds assert.
    pub unsafe fn get_unchecked(&self) -> &T {
        debug_assert!(self.engaged, "get_unchecked on an empty Optional");
        // SAFETY: the safety contract must be upheld by the caller.
        unsafe { self.slot.assume_ref() }
    }

    /// # Safety
    /// Same contract as [`Optional::get_unchecked`].
    pub unsafe fn get_unchecked_mut(&mut self) -> &mut T {
        debug_assert!(self.engaged, "get_unchecked_mut on an empty Optional");
        // SAFETY: the safety contract must be upheld by the caller.
        unsafe { self.slot.assume_mut() }
    }

    /// Moves the payload out without checking that there is one.
    ///
    /// # Safety
    /// Same contract as [`Optional::get_unchecked`].
    pub unsafe fn into_inner_unchecked(mut self) -> T {
        match self.take_payload() {
            Some(value) => value,
            // SAFETY: the safety contract must be upheld by the caller.
            None => unsafe { hint::unreachable_unchecked() },
        }
    }

    /// # Errors
    /// [`BadOptionalAccess`] if the container is empty.
    pub fn value(&self) -> Result<&T, BadOptionalAccess> {
        self.as_option().ok_or_else(bad_access::<T>)
    }

    /// # Errors
    /// [`BadOptionalAccess`] if the container is empty.
    pub fn value_mut(&mut self) -> Result<&mut T, BadOptionalAccess> {
        self.as_option_mut().ok_or_else(bad_access::<T>)
    }

    /// # Errors
    /// [`BadOptionalAccess`] if the container is empty.
    pub fn into_value(self) -> Result<T, BadOptionalAccess> {
        self.into_option().ok_or_else(bad_access::<T>)
    }

    #[must_use]
    pub const fn as_option(&self) -> Option<&T> {
        if self.engaged {
            // SAFETY: engaged means the slot holds a live payload.
            Some(unsafe { self.slot.assume_ref() })
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_option_mut(&mut self) -> Option<&mut T> {
        if self.engaged {
            // SAFETY: engaged means the slot holds a live payload.
            Some(unsafe { self.slot.assume_mut() })
        } else {
            None
        }
    }

    #[must_use]
    pub fn into_option(mut self) -> Option<T> {
        self.take_payload()
    }

    /// Stores `value`, reusing the payload's own assignment if engaged.
    pub fn assign(&mut self, value: T) -> &mut T {
        if self.engaged {
            // SAFETY: engaged means the slot holds a live payload.
            let payload = unsafe { self.slot.assume_mut() };
            *payload = value;
            payload
        } else {
            self.construct(value)
        }
    }

    /// Copy-assigns from a borrowed payload.
    ///
    /// An engaged container goes through [`Clone::clone_from`], so payloads
    /// that keep buffers around get to reuse them.
    pub fn assign_cloned(&mut self, value: &T) -> &mut T
    where
        T: Clone,
    {
        if self.engaged {
            // SAFETY: engaged means the slot holds a live payload.
            let payload = unsafe { self.slot.assume_mut() };
            payload.clone_from(value);
            payload
        } else {
            self.construct(value.clone())
        }
    }

    /// Move-assigns from another container.
    ///
    /// | self \ rhs | engaged                 | empty          |
    /// |------------|-------------------------|----------------|
    /// | empty      | payload moved in        | nothing        |
    /// | engaged    | payload move-assigned   | payload dropped|
    pub fn assign_from(&mut self, rhs: Self) {
        match rhs.into_option() {
            Some(value) => {
                self.assign(value);
            }
            None => self.reset(),
        }
    }

    /// Moves the whole state out, leaving `self` empty.
    pub const fn take(&mut self) -> Self {
        mem::replace(self, Self::new())
    }

    pub fn reset(&mut self) {
        if self.engaged {
            self.engaged = false;
            // SAFETY: the slot was engaged and the flag is already cleared.
            unsafe { self.slot.drop_payload() };
        }
    }

    /// Drops any current payload, then stores `value`.
    pub fn emplace(&mut self, value: T) -> &mut T {
        self.reset();
        self.construct(value)
    }

    /// Drops any current payload, then builds a new one with `make`.
    ///
    /// The old payload is gone before `make` runs; if `make` panics the
    /// container is left empty.
    pub fn emplace_with<F>(&mut self, make: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        self.reset();
        let value = make();
        self.construct(value)
    }

    fn construct(&mut self, value: T) -> &mut T {
        debug_assert!(!self.engaged, "construct over a live payload");
        self.engaged = true;
        self.slot.put(value)
    }

    fn take_payload(&mut self) -> Option<T> {
        if !self.engaged {
            return None;
        }
        self.engaged = false;
        // SAFETY: the slot was engaged and the flag is already cleared.
        Some(unsafe { self.slot.take() })
    }
}

#[cold]
fn bad_access<T>() -> BadOptionalAccess {
    #[cfg(feature = "log")]
    log::debug!("access to an empty Optional<{}>", any::type_name::<T>());
    BadOptionalAccess
}

#[cold]
#[track_caller]
fn access_failed<T>() -> ! {
    panic!("{}", bad_access::<T>())
}

impl<T> Drop for Optional<T> {
    fn drop(&mut self) {
        self.reset();
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Optional<T> {
        Optional::new()
    }
}

impl<T> Clone for Optional<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        self.as_option()
            .map_or_else(Optional::new, |x| Optional::new_engaged(x.clone()))
    }

    /// Copy-assignment. Mirrors `source`, reusing this payload when both are
    /// engaged.
    fn clone_from(&mut self, source: &Self) {
        match (self.engaged, source.as_option()) {
            (true, Some(from)) => {
                // SAFETY: engaged means the slot holds a live payload.
                let to = unsafe { self.slot.assume_mut() };
                to.clone_from(from);
            }
            (false, Some(from)) => {
                self.construct(from.clone());
            }
            (true, None) => self.reset(),
            (false, None) => (),
        }
    }
}

impl<T> Deref for Optional<T> {
    type Target = T;

    /// # Panics
    /// Panics with the [`BadOptionalAccess`] message if empty. Use
    /// [`Optional::get_unchecked`] to skip the check.
    #[track_caller]
    fn deref(&self) -> &T {
        let Some(value) = self.as_option() else {
            access_failed::<T>()
        };
        value
    }
}

impl<T> DerefMut for Optional<T> {
    #[track_caller]
    fn deref_mut(&mut self) -> &mut T {
        let Some(value) = self.as_option_mut() else {
            access_failed::<T>()
        };
        value
    }
}

impl<T> From<T> for Optional<T> {
    fn from(value: T) -> Optional<T> {
        Optional::new_engaged(value)
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Optional<T> {
        value.map_or_else(Optional::new, Optional::new_engaged)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Option<T> {
        value.into_option()
    }
}

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_option() {
            Some(value) => f.debug_tuple("Engaged").field(value).finish(),
            None => f.write_str("Empty"),
        }
    }
}
