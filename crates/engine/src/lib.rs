//! # styx-engine
//!
//! The composition layer over the opaque simulation engine: a trait for
//! the fixed call boundary, capability resolution, and a single-owner
//! handle that runs each request/response cycle through the leaf crates:
//! dates through `styx-calendar`, buffer sizing through `styx-interval`,
//! string tables through `styx-table`, scale factors through `styx-units`.
//!
//! The design rule throughout is *fail before crossing the boundary*: a
//! malformed date or buffer handed to the engine is undefined behavior
//! with no recovery path, so every value is validated on this side first,
//! and engine output that violates the wire contract aborts the response.
//!
//! Raw engine status codes are never interpreted here; they accompany
//! every decoded [`Response`] so callers can apply the convention of the
//! engine build in use.
//!
//! ## Quick Start
//!
//! ```ignore
//! use styx_engine::{EngineHandle, HydrographRequest, LocationKind};
//! use styx_calendar::SimDate;
//! use styx_interval::ReportingInterval;
//! use styx_units::{ConversionFactor, UnitKind, FEET_IDENTITY};
//!
//! let mut handle = EngineHandle::new(engine);
//! let window = handle.time_window()?;
//!
//! let request = HydrographRequest::new(
//!     LocationKind::Node,
//!     42,
//!     window.payload.begin,
//!     window.payload.end,
//!     ReportingInterval::parse("1MON")?,
//!     ConversionFactor::resolve(FEET_IDENTITY, UnitKind::Length)?,
//! );
//! let series = handle.hydrograph(&request)?;
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `api` | `EngineApi` boundary trait and location kinds |
//! | `capability` | Procedure enumeration, resolved once per handle |
//! | `handle` | Single-owner handle, cached scalars, request cycles |
//! | `result` | Request and response value types |
//! | `status` | Raw status codes, conventions documented not unified |
//! | `error` | Error types |

mod api;
mod capability;
mod error;
mod handle;
mod result;
mod status;

pub use api::{EngineApi, LocationKind};
pub use capability::{Capabilities, Procedure};
pub use error::EngineError;
pub use handle::EngineHandle;
pub use result::{Hydrograph, HydrographRequest, NameTable, Response, TimeWindow};
pub use status::StatusCode;

pub use styx_calendar::SimDate;
pub use styx_interval::ReportingInterval;
pub use styx_units::{ConversionFactor, UnitKind};
