//! OpenPGP DSA packet parameter extraction
//!
//! This crate reads the MPI regions of RFC4880 DSA public-key (§5.5.2) and
//! signature (§5.2.2) packet bodies. Locating those regions inside a packet
//! is left to the caller.

pub mod mpi;
pub mod pubkey;
pub mod signature;

pub use mpi::{decode_mpi_length, read_mpi};
pub use pubkey::get_pubkey_params;
pub use signature::get_signature_params;
