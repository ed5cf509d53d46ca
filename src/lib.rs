//! GeoPin — map share-link coordinate resolver.
//!
//! Takes the kind of shortened URL a maps app hands out, follows its
//! single redirect hop, and pulls the embedded latitude/longitude out of
//! the expanded URL. Everything that can go wrong collapses to "no
//! coordinate" — the caller renders that as "no marker", not an error.

pub mod link;
pub mod server;
