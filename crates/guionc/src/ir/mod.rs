//! Intermediate Representation module
//!
//! Per-scene ordered instruction lists, decoupled from both the source
//! syntax and the emitted target syntax.

mod builder;
mod inst;

pub use builder::{lower, IrBuilder};
pub use inst::{IrInstruction, IrProgram, SceneIr};
