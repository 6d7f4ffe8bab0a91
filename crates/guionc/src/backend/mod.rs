//! Backend code generation
//!
//! Target-specific rendering of the IR. Python is currently the only target.

mod python;

pub use python::{emit, PythonEmitter};
