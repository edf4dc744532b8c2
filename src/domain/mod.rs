//! Domain logic - version values and their precedence, free of I/O

pub mod comparator;
pub mod natural;
pub mod version;

pub use comparator::{compare, Comparator, SemanticComparator};
pub use natural::compare_natural;
pub use version::Version;
