//! # styx-table
//!
//! Codec for string tables crossing a fixed-buffer call boundary: an
//! ordered string sequence flattened into one concatenated character
//! buffer plus a parallel array of start offsets and a logical count.
//!
//! The engine emits 1-based (Fortran-style) offsets; already-normalized
//! internal sources use 0-based ones. [`decode`] detects the convention by
//! inspecting the first offset and normalizes before slicing, so callers
//! never pass a convention flag. [`encode`] always produces the 1-based
//! wire form for engine-bound lists.
//!
//! ## Quick Start
//!
//! ```ignore
//! use styx_table::{decode, encode};
//!
//! let names = decode(buffer, &offsets, returned_count)?;
//!
//! let outbound = encode(&["ZONE_A", "ZONE_B"]);
//! assert_eq!(outbound.offsets, vec![1, 7]);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `decode` | Flat buffer + offsets to string sequence |
//! | `encode` | String sequence to the 1-based wire form |
//! | `error` | Error types |

mod decode;
mod encode;
mod error;

pub use decode::decode;
pub use encode::{encode, FlatTable};
pub use error::TableError;
