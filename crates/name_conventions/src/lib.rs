/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Name Conventions
//!
//! Formats the last name and infix of a person from their own family name,
//! their partner's family name, the prefixes (particles such as "van der")
//! of both, and a naming convention code:
//!
//! | code | last name                              | infix          |
//! |------|----------------------------------------|----------------|
//! | `B`  | own family name                        | own prefix     |
//! | `P`  | partner's family name                  | partner prefix |
//! | `BP` | own, then partner's with its prefix    | own prefix     |
//! | `PB` | partner's, then own with its prefix    | partner prefix |
//!
//! Any other code is treated as `B`. Formatting never fails.
//!
//! # Example
//!
//! ```rust
//! use name_conventions::{format_infix, format_last_name, NameInput};
//!
//! let input = NameInput::new("Vries")
//!     .with_prefix("de")
//!     .with_partner(None, "Smit")
//!     .with_convention("PB");
//!
//! assert_eq!(format_last_name(&input), "Smit - de Vries");
//! assert_eq!(format_infix(&input), "");
//! ```

pub mod convention;
pub mod error;
pub mod format;
pub mod input;

pub use convention::{Convention, Side};
pub use error::{NamingError, Result};
pub use format::{
    format_infix, format_last_name, format_name, is_present, FormattedName, SURNAME_SEPARATOR,
};
pub use input::{FamilyParts, NameInput, Person};
