//! Command implementations for OxiCRC CLI.

pub mod check;
pub mod compare;
pub mod list;
pub mod sum;

pub use check::{VectorSize, cmd_check};
pub use compare::cmd_compare;
pub use list::cmd_list;
pub use sum::{SumOptions, cmd_sum};
