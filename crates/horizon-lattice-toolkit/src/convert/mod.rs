//! Relative unit conversion (`rem()` / `em()`).

mod units;

pub use units::{convert, effective_base, em, rem};
