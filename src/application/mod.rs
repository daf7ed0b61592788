//! Request construction and response interpretation for the PayLeap protocol.
//!
//! Each operation flows `field_mapper` → `encoder` → transport → `parser` →
//! `interpreter`; `gateway` wires the steps together behind one method per
//! operation.

pub mod encoder;
pub mod field_mapper;
pub mod gateway;
pub mod interpreter;
pub mod parser;
