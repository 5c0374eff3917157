#![allow(async_fn_in_trait)]
pub mod cmr;
pub mod collection_id;
pub mod documents;
pub mod error;
pub mod http;
pub mod logging;
pub mod stac_operations;
pub mod walk;
pub mod walk_selection;

#[cfg(test)]
mod fixtures;

pub use error::{ErrorKind, Result, WalkError};
