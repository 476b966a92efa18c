//! Input helpers shared across layers.
//!
//! - [`destination`] - Decoding stored destination URLs
//! - [`slug`] - Slug validation

pub mod destination;
pub mod slug;
