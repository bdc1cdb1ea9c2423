//! Internal buffer management for the hash engine.
//!
//! This module provides the fixed-size carry buffer that holds the tail of
//! the input between `append` calls. It is an implementation detail and not
//! part of the public API.

mod carry;

pub(crate) use carry::{BLOCK_LEN, CarryBuffer};
