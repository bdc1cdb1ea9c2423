//! Block types.
//!
//! - [`Block`] - One fixed-size block snapshot with its owner
//! - [`Digest`] - 16-byte content fingerprint
//! - [`OwnerId`] - Identifier of the entity holding a block

mod data;
mod digest;
mod owner;

pub use data::Block;
pub use digest::Digest;
pub use owner::OwnerId;
