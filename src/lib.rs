//! Parse, validate and order Semantic Versioning 2.0 identifiers
//! (`MAJOR.MINOR.PATCH[-PRE][+META]`).
//!
//! ```
//! use semantic_versioning::{compare, Version};
//! use std::cmp::Ordering;
//!
//! let candidate: Version = "1.0.0-rc.1".parse().unwrap();
//! let release: Version = "1.0.0".parse().unwrap();
//! assert_eq!(compare(&candidate, &release), Ordering::Less);
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod ui;

pub use domain::{compare, Comparator, SemanticComparator, Version};
pub use error::{ParseError, Result, SemverError};
