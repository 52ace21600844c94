#![deny(unsafe_code)]
//! # attest-canonical
//!
//! Deterministic encoding and hashing for commitment digests.
//!
//! A reasoning trace is committed by hashing its canonical JSON form:
//! object keys sorted at every nesting depth (array order kept), then
//! BLAKE3 over a domain-separation prefix plus the encoded bytes. Two
//! traces with the same field content always produce the same digest, and
//! any single-field change produces a different one.
//!
//! ## Key Types
//!
//! - [`canonical_json`] — deterministic string encoding of any `Serialize`
//! - [`digest`] — canonical encoding hashed into a [`TraceDigest`]
//! - [`TraceDigest`] — 32-byte BLAKE3 digest, hex on the wire

pub mod digest;
pub mod encode;

pub use digest::{digest, DigestError, TraceDigest};
pub use encode::{canonical_json, CanonicalError};
