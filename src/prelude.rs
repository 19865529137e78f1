//! Convenient imports for Strata Optional.
//!
//! ```
//! use strata_optional::prelude::*;
//!
//! let o: Optional<u8> = Optional::new();
//! assert_eq!(o.value(), Err(Error::BadOptionalAccess));
//! ```

// Container
pub use crate::optional::Optional;

// Error handling
pub use crate::error::{Error, Result};
