//! Common imports for test files
//!
//! This module provides a convenient way to import frequently used items
//! in test files with `use tests::prelude::*;`

pub use crate::{assert_err, assert_ok};
pub use crate::{fixtures, init_tracing, mapper, FetchLog, LoggingSource};

pub use forcemap::{AttributeSet, Mapper, Mode, Record, Source, Value};
