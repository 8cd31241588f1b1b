//! Optimized collection types for nodelens.
//!
//! Re-exports hash collections backed by AHash. The per-frame stat store and
//! the preview cache both key on small integer identities, where AHash is
//! measurably faster than the default SipHash.

pub use ahash::{AHashMap as HashMap, AHashSet as HashSet, RandomState};
