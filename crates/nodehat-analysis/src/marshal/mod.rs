//! Marshalling: which methods the engine can call by name, and how their
//! signatures cross the boundary.
//!
//! - [`ValueTypeMapper`]: declared type to wire category
//! - [`MethodTableBuilder`]: the per-class dispatch table

mod mapper;
mod table;

pub use mapper::ValueTypeMapper;
pub use table::{
    MarshalledParam, MethodTable, MethodTableBuilder, MethodTableEntry, compare_identifiers,
};
