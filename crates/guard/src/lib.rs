//! # roseau-guard
//!
//! Guard clauses that check argument preconditions and fail fast.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["date pair"] -->|"validate_ascending_pair()"| R["Result<(), GuardError>"]
//!     B["date slice"] -->|"validate_ascending_sequence()"| A
//!     C["two sequences"] -->|"validate_equal_length()"| D["element_count()"]
//!     D --> R
//! ```
//!
//! Every guard is a pure function of its arguments. A passing guard returns
//! `Ok(())`; a failing guard returns a [`GuardError`] naming the offending
//! parameter. Nothing is logged or recovered here: callers propagate with `?`.
//!
//! ## Quick Start
//!
//! ```ignore
//! use chrono::NaiveDate;
//! use roseau_guard::{validate_ascending_pair, validate_ascending_sequence, validate_equal_length};
//!
//! let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
//! let end = NaiveDate::from_ymd_opt(2020, 12, 31).unwrap();
//! validate_ascending_pair(&start, "start date", &end, "end date")?;
//!
//! validate_ascending_sequence(&[start, end], "observation dates")?;
//!
//! let values = vec![1.0, 2.0, 3.0];
//! let weights = vec![0.2, 0.3, 0.5];
//! validate_equal_length(Some(&values), "values", Some(&weights), "weights")?;
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `order` | Chronological order of date pairs and sequences |
//! | `length` | Element counting and length equality |
//! | `error` | Error types |

mod error;
mod length;
mod order;

pub use error::GuardError;
pub use length::{MAX_TRAVERSAL_COUNT, element_count, validate_equal_length};
pub use order::{validate_ascending_pair, validate_ascending_sequence};
