//! The opaque engine call boundary.

use crate::capability::Procedure;
use crate::status::StatusCode;

/// The kinds of model locations that carry names and hydrographs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocationKind {
    /// Mesh node.
    Node,
    /// Mesh element.
    Element,
    /// Aggregated subregion.
    Subregion,
    /// Stream network node.
    StreamNode,
    /// Lake.
    Lake,
}

/// The fixed call boundary of the pre-built simulation engine.
///
/// Implementations are adapters over the actual compiled engine; this
/// crate only depends on the calling conventions:
///
/// - every text parameter is a fixed-width byte buffer whose *allocated*
///   length (the slice length) is what the engine sees, never a logical
///   string length;
/// - every list output is {flat buffer, parallel offset array, actual
///   count out-parameter}, and the actual count may be smaller than the
///   capacity passed in;
/// - every call returns a raw [`StatusCode`] whose success convention
///   varies between engine builds and is interpreted by the caller.
///
/// The engine behind the boundary is stateful (current simulation time,
/// open file handles) and not concurrency-safe, hence `&mut self`
/// throughout; [`EngineHandle`](crate::EngineHandle) is the serialization
/// point.
pub trait EngineApi {
    /// Reports whether this engine build exports `procedure`.
    fn has_procedure(&self, procedure: Procedure) -> bool;

    /// Fills a string table of every output time stamp plus the reporting
    /// interval text, writing the interval's byte length to `interval_len`.
    fn time_specs(
        &mut self,
        date_buffer: &mut [u8],
        offsets: &mut [i64],
        n_dates: &mut i64,
        interval_buffer: &mut [u8],
        interval_len: &mut i64,
    ) -> StatusCode;

    /// Writes the number of simulation time steps.
    fn n_time_steps(&mut self, count: &mut i64) -> StatusCode;

    /// Writes the number of mesh nodes.
    fn n_nodes(&mut self, count: &mut i64) -> StatusCode;

    /// Writes the number of stratigraphic layers.
    fn n_layers(&mut self, count: &mut i64) -> StatusCode;

    /// Writes the entry count and required flat-buffer length for the
    /// name table of `kind`, so the caller can size the real request.
    fn location_table_dims(
        &mut self,
        kind: LocationKind,
        count: &mut i64,
        buffer_len: &mut i64,
    ) -> StatusCode;

    /// Fills the name table for `kind`.
    fn location_names(
        &mut self,
        kind: LocationKind,
        buffer: &mut [u8],
        offsets: &mut [i64],
        count: &mut i64,
    ) -> StatusCode;

    /// Fills one hydrograph: epoch day offsets into `times` and scaled
    /// values into `values`, writing the sample count actually produced to
    /// `n_out`. `begin`, `end`, and `interval` are the 16-character date
    /// texts and canonical interval text; `factor` is applied to the
    /// values by the engine itself.
    #[allow(clippy::too_many_arguments)]
    fn hydrograph(
        &mut self,
        kind: LocationKind,
        id: i32,
        begin: &[u8],
        end: &[u8],
        interval: &[u8],
        factor: f64,
        times: &mut [f64],
        values: &mut [f64],
        n_out: &mut i64,
    ) -> StatusCode;
}
