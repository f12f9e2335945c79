//! Request and response value types for handle operations.

use styx_calendar::SimDate;
use styx_interval::ReportingInterval;
use styx_units::ConversionFactor;

use crate::api::LocationKind;
use crate::status::StatusCode;

/// A decoded engine response together with the raw status code.
///
/// The status is never interpreted by this layer (see
/// [`StatusCode`]); it rides alongside the payload so callers can apply
/// the convention of the engine build they link against.
#[derive(Debug, Clone, PartialEq)]
pub struct Response<T> {
    /// The decoded result.
    pub payload: T,
    /// The raw status code of the underlying engine call.
    pub status: StatusCode,
}

/// Simulation time specification decoded from the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeWindow {
    /// First output time stamp.
    pub begin: SimDate,
    /// Last output time stamp.
    pub end: SimDate,
    /// Reporting interval of the simulation output.
    pub interval: ReportingInterval,
    /// Number of output time stamps the engine reported.
    pub step_count: usize,
}

/// Decoded location names together with the sizing call's status code.
///
/// Filling a name table takes two engine calls, a dimension query and the
/// fill itself. The fill's code rides on the [`Response`] and the
/// dimension query's code rides here, so neither is dropped: a failing
/// dimension query that zeroes its out-parameters would otherwise be
/// indistinguishable from a model with no locations of that kind.
#[derive(Debug, Clone, PartialEq)]
pub struct NameTable {
    /// Decoded names, trimmed of fixed-width padding.
    pub names: Vec<String>,
    /// Raw status code of the dimension query that sized the buffers.
    pub dims_status: StatusCode,
}

/// One decoded hydrograph time series.
#[derive(Debug, Clone, PartialEq)]
pub struct Hydrograph {
    /// Sample time stamps, decoded from epoch day offsets.
    pub dates: Vec<SimDate>,
    /// Sample values, scaled by the request's conversion factor.
    pub values: Vec<f64>,
}

/// A validated hydrograph request.
///
/// Every field is validated at construction by the leaf crates (dates by
/// parse, interval by vocabulary, factor by resolution), so a request that
/// exists is safe to hand across the boundary. The end-date sample is
/// included by default; [`with_include_end`](Self::with_include_end)
/// makes the adjustment explicit rather than a silent default buried in
/// the buffer sizing.
#[derive(Debug, Clone, PartialEq)]
pub struct HydrographRequest {
    kind: LocationKind,
    id: i32,
    begin: SimDate,
    end: SimDate,
    interval: ReportingInterval,
    factor: ConversionFactor,
    include_end: bool,
}

impl HydrographRequest {
    /// Creates a request for one hydrograph location.
    pub fn new(
        kind: LocationKind,
        id: i32,
        begin: SimDate,
        end: SimDate,
        interval: ReportingInterval,
        factor: ConversionFactor,
    ) -> Self {
        Self {
            kind,
            id,
            begin,
            end,
            interval,
            factor,
            include_end: true,
        }
    }

    /// Sets whether a sample slot is allocated for the end date itself.
    pub fn with_include_end(mut self, include_end: bool) -> Self {
        self.include_end = include_end;
        self
    }

    /// Returns the location kind.
    pub fn kind(&self) -> LocationKind {
        self.kind
    }

    /// Returns the hydrograph id.
    pub fn id(&self) -> i32 {
        self.id
    }

    /// Returns the begin date.
    pub fn begin(&self) -> SimDate {
        self.begin
    }

    /// Returns the end date.
    pub fn end(&self) -> SimDate {
        self.end
    }

    /// Returns the reporting interval.
    pub fn interval(&self) -> ReportingInterval {
        self.interval
    }

    /// Returns the conversion factor forwarded to the engine.
    pub fn factor(&self) -> ConversionFactor {
        self.factor
    }

    /// Returns whether the end-date sample slot is included.
    pub fn include_end(&self) -> bool {
        self.include_end
    }
}
