//! # Strata Optional
//!
//! A single-owner "value or nothing" container with inline storage.
//!
//! [`Optional<T>`] lets an API say "maybe absent" without null pointers or
//! sentinel values, while the caller stays in control of when the held value
//! is built and dropped.
//!
//! ## Quick Start
//!
//! ```
//! use strata_optional::prelude::*;
//!
//! let mut o = Optional::some(vec![1, 2, 3]);
//! let copy = o.clone();
//!
//! o.value_mut()?.push(4);
//! assert_eq!(copy.value()?, &vec![1, 2, 3]);
//!
//! o.reset();
//! assert!(o.value().is_err());
//! # Ok::<(), Error>(())
//! ```
//!
//! ## Access
//!
//! - Checked: [`Optional::value`], [`Optional::value_mut`],
//!   [`Optional::into_value`] return [`Error::BadOptionalAccess`] when empty
//! - Unchecked: [`Optional::value_unchecked`] and
//!   [`Optional::value_unchecked_mut`] are `unsafe` and must only be called
//!   once presence is known
//!
//! ## Lifecycle
//!
//! - [`Optional::emplace`] drops the old value, then stores the new one
//! - [`Optional::reset`] drops the held value
//! - [`Clone::clone_from`] and [`Optional::move_from`] follow the transfer
//!   rule described in the [`optional`] module docs

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
pub mod optional;

pub mod prelude;

pub use error::{Error, Result};
pub use optional::Optional;
