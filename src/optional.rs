//! Single-owner optional value container
//!
//! [`Optional<T>`] holds either one live `T` or nothing. The value is stored
//! inline; the container never allocates.
//!
//! Presence and storage live in one tagged enum, so there is no separate
//! flag that could disagree with what is actually stored. Every transition
//! between "present" and "absent" is a single write of that enum, and the
//! value being replaced is only dropped after the slot already reads as
//! empty.
//!
//! ## Transfer rule
//!
//! Clone-assignment ([`Clone::clone_from`]) and move-assignment
//! ([`Optional::move_from`]) follow the same table, keyed on destination and
//! source presence:
//!
//! | destination | source  | effect                                        |
//! |-------------|---------|-----------------------------------------------|
//! | present     | present | assign source value into the held value       |
//! | absent      | present | store a new value built from the source       |
//! | present     | absent  | drop the held value, destination becomes absent |
//! | absent      | absent  | nothing                                       |
//!
//! Construction (`clone`, moving an `Optional`) only ever reaches the last
//! two rows because a fresh destination starts absent.

use crate::error::{Error, Result};
use std::any::type_name;
use std::fmt;
use std::mem;
use std::ptr;
use tracing::{debug, trace};

/// Storage for an [`Optional`]: the variant is the presence state.
#[derive(PartialEq, Eq, Hash)]
enum Slot<T> {
    Empty,
    Present(T),
}

/// A value of type `T`, or nothing.
///
/// # Examples
///
/// ```
/// use strata_optional::{Error, Optional};
///
/// let mut o = Optional::new();
/// assert!(!o.has_value());
///
/// o.emplace(42);
/// assert_eq!(o.value(), Ok(&42));
///
/// o.reset();
/// assert_eq!(o.value(), Err(Error::BadOptionalAccess));
/// ```
#[derive(PartialEq, Eq, Hash)]
pub struct Optional<T> {
    slot: Slot<T>,
}

impl<T> Optional<T> {
    /// Create an empty optional.
    pub const fn new() -> Self {
        Self { slot: Slot::Empty }
    }

    /// Create an empty optional. Alias of [`Optional::new`].
    pub const fn none() -> Self {
        Self::new()
    }

    /// Create an optional holding `value`.
    pub const fn some(value: T) -> Self {
        Self {
            slot: Slot::Present(value),
        }
    }

    /// Create an optional holding a clone of `value`.
    pub fn from_ref(value: &T) -> Self
    where
        T: Clone,
    {
        Self::some(value.clone())
    }

    /// Returns true if a value is present.
    pub const fn has_value(&self) -> bool {
        matches!(self.slot, Slot::Present(_))
    }

    /// Borrow the held value.
    ///
    /// # Errors
    ///
    /// [`Error::BadOptionalAccess`] if the optional is empty. The optional
    /// is left untouched.
    pub fn value(&self) -> Result<&T> {
        match &self.slot {
            Slot::Present(value) => Ok(value),
            Slot::Empty => Err(Self::bad_access("value")),
        }
    }

    /// Mutably borrow the held value.
    ///
    /// # Errors
    ///
    /// [`Error::BadOptionalAccess`] if the optional is empty.
    pub fn value_mut(&mut self) -> Result<&mut T> {
        match &mut self.slot {
            Slot::Present(value) => Ok(value),
            Slot::Empty => Err(Self::bad_access("value_mut")),
        }
    }

    /// Move the held value out, consuming the optional.
    ///
    /// # Errors
    ///
    /// [`Error::BadOptionalAccess`] if the optional is empty.
    pub fn into_value(self) -> Result<T> {
        match self.slot {
            Slot::Present(value) => Ok(value),
            Slot::Empty => Err(Self::bad_access("into_value")),
        }
    }

    /// Borrow the held value without checking presence.
    ///
    /// # Safety
    ///
    /// The optional must hold a value. Calling this on an empty optional is
    /// undefined behavior; use [`Optional::value`] unless presence has already
    /// been established with [`Optional::has_value`].
    pub unsafe fn value_unchecked(&self) -> &T {
        debug_assert!(self.has_value(), "value_unchecked on empty optional");
        match &self.slot {
            Slot::Present(value) => value,
            // SAFETY: the caller guarantees the slot is present.
            Slot::Empty => unsafe { std::hint::unreachable_unchecked() },
        }
    }

    /// Mutably borrow the held value without checking presence.
    ///
    /// # Safety
    ///
    /// Same contract as [`Optional::value_unchecked`].
    pub unsafe fn value_unchecked_mut(&mut self) -> &mut T {
        debug_assert!(self.has_value(), "value_unchecked_mut on empty optional");
        match &mut self.slot {
            Slot::Present(value) => value,
            // SAFETY: the caller guarantees the slot is present.
            Slot::Empty => unsafe { std::hint::unreachable_unchecked() },
        }
    }

    /// View as a standard `Option` of a shared reference.
    pub fn as_option(&self) -> Option<&T> {
        match &self.slot {
            Slot::Present(value) => Some(value),
            Slot::Empty => None,
        }
    }

    /// View as a standard `Option` of a mutable reference.
    pub fn as_option_mut(&mut self) -> Option<&mut T> {
        match &mut self.slot {
            Slot::Present(value) => Some(value),
            Slot::Empty => None,
        }
    }

    /// Move the contents out into a new optional, leaving `self` empty.
    ///
    /// The held value is moved, not dropped or cloned.
    pub fn take(&mut self) -> Self {
        Self {
            slot: mem::replace(&mut self.slot, Slot::Empty),
        }
    }

    /// Drop the held value, if any. Calling it on an empty optional does
    /// nothing.
    pub fn reset(&mut self) {
        if self.has_value() {
            trace!(value_type = type_name::<T>(), "dropping held value");
            // The slot reads as empty before the old value's destructor runs.
            let old = mem::replace(&mut self.slot, Slot::Empty);
            drop(old);
        }
    }

    /// Replace the contents with `value`, dropping any previously held value
    /// first.
    pub fn emplace(&mut self, value: T) -> &mut T {
        self.emplace_with(|| value)
    }

    /// Drop any held value, then build a new one with `make` and store it.
    ///
    /// Exactly one drop (when a value was present) happens before exactly one
    /// construction. If `make` panics the optional is left empty.
    pub fn emplace_with<F>(&mut self, make: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        self.reset();
        self.slot = Slot::Present(make());
        self.present_mut()
    }

    /// Fallible [`Optional::emplace_with`].
    ///
    /// Any held value is dropped before `make` runs. When `make` fails the
    /// optional stays empty and the error is returned unchanged.
    pub fn try_emplace_with<E, F>(&mut self, make: F) -> std::result::Result<&mut T, E>
    where
        F: FnOnce() -> std::result::Result<T, E>,
    {
        self.reset();
        let value = make()?;
        self.slot = Slot::Present(value);
        Ok(self.present_mut())
    }

    /// Move-assign a bare value.
    ///
    /// If a value is present it is overwritten in place, otherwise `value` is
    /// stored and the optional becomes present.
    pub fn assign(&mut self, value: T) -> &mut T {
        if let Slot::Present(current) = &mut self.slot {
            *current = value;
        } else {
            self.slot = Slot::Present(value);
        }
        self.present_mut()
    }

    /// Clone-assign a bare value.
    ///
    /// A present value is updated with [`Clone::clone_from`], so it can reuse
    /// its own resources.
    pub fn assign_cloned(&mut self, value: &T) -> &mut T
    where
        T: Clone,
    {
        if let Slot::Present(current) = &mut self.slot {
            current.clone_from(value);
        } else {
            self.slot = Slot::Present(value.clone());
        }
        self.present_mut()
    }

    /// Move-assign from another optional.
    ///
    /// Applies the transfer rule with move semantics. `source` is always left
    /// empty afterwards, and a value that moves is never dropped twice.
    pub fn move_from(&mut self, source: &mut Self) {
        if ptr::eq(&*self, &*source) {
            return;
        }
        match source.take().slot {
            Slot::Present(value) => {
                self.assign(value);
            }
            Slot::Empty => self.reset(),
        }
    }

    fn present_mut(&mut self) -> &mut T {
        match &mut self.slot {
            Slot::Present(value) => value,
            Slot::Empty => unreachable!("slot was filled by the caller"),
        }
    }

    fn bad_access(accessor: &'static str) -> Error {
        debug!(
            value_type = type_name::<T>(),
            accessor, "checked access on empty optional"
        );
        Error::BadOptionalAccess
    }
}

impl<T: Clone> Clone for Optional<T> {
    fn clone(&self) -> Self {
        match &self.slot {
            Slot::Present(value) => Self::some(value.clone()),
            Slot::Empty => Self::new(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        // Never mutate storage we are about to read from.
        if ptr::eq(&*self, source) {
            return;
        }
        match &source.slot {
            Slot::Present(value) => {
                self.assign_cloned(value);
            }
            Slot::Empty => self.reset(),
        }
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.slot {
            Slot::Present(value) => f.debug_tuple("Optional::Some").field(value).finish(),
            Slot::Empty => f.write_str("Optional::None"),
        }
    }
}

impl<T> From<T> for Optional<T> {
    fn from(value: T) -> Self {
        Self::some(value)
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::some(value),
            None => Self::new(),
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Self {
        match optional.slot {
            Slot::Present(value) => Some(value),
            Slot::Empty => None,
        }
    }
}
