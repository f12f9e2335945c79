//! The single-owner engine handle.

use tracing::debug;

use styx_calendar::SimDate;
use styx_interval::{count, ReportingInterval};
use styx_table::decode;

use crate::api::{EngineApi, LocationKind};
use crate::capability::{Capabilities, Procedure};
use crate::error::EngineError;
use crate::result::{Hydrograph, HydrographRequest, NameTable, Response, TimeWindow};

/// Byte width of a date text on the wire.
const DATE_TEXT_LEN: usize = 16;

/// Allocated capacity for the reporting-interval text out-buffer.
const INTERVAL_TEXT_CAPACITY: usize = 8;

/// Owning wrapper around one engine instance.
///
/// The engine is stateful and not concurrency-safe, so the handle owns it
/// exclusively and takes `&mut self` for every operation, so access is
/// serialized by ownership, with no lock. The leaf codec and calendar
/// components impose no such restriction.
///
/// Capabilities are resolved once at construction. Scalar queries
/// (node, layer, and time-step counts) are cached after the first call
/// and invalidated only by the explicit [`refresh`](Self::refresh)
/// transition, which models engine re-instantiation.
///
/// Every operation validates its inputs through the leaf crates and sizes
/// its buffers before the boundary is crossed; engine output that violates
/// the wire contract aborts the response with a typed error.
#[derive(Debug)]
pub struct EngineHandle<E: EngineApi> {
    engine: E,
    capabilities: Capabilities,
    node_count: Option<Response<i64>>,
    layer_count: Option<Response<i64>>,
    time_step_count: Option<Response<i64>>,
}

impl<E: EngineApi> EngineHandle<E> {
    /// Wraps an engine instance, resolving its capability set once.
    pub fn new(engine: E) -> Self {
        let capabilities = Capabilities::resolve(&engine);
        debug!(?capabilities, "resolved engine capabilities");
        Self {
            engine,
            capabilities,
            node_count: None,
            layer_count: None,
            time_step_count: None,
        }
    }

    /// Returns the capability set resolved at construction.
    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    /// Re-resolves capabilities and drops every cached scalar.
    ///
    /// Call after any engine-state-changing operation (re-instantiation,
    /// loading a different model). Nothing else invalidates the caches.
    pub fn refresh(&mut self) {
        self.capabilities = Capabilities::resolve(&self.engine);
        self.node_count = None;
        self.layer_count = None;
        self.time_step_count = None;
        debug!("refreshed capabilities and dropped cached counts");
    }

    /// Consumes the handle and returns the engine instance.
    pub fn into_engine(self) -> E {
        self.engine
    }

    fn require(&self, procedure: Procedure) -> Result<(), EngineError> {
        if self.capabilities.supports(procedure) {
            Ok(())
        } else {
            Err(EngineError::MissingProcedure { procedure })
        }
    }

    /// Number of mesh nodes, cached after the first engine call.
    pub fn node_count(&mut self) -> Result<Response<i64>, EngineError> {
        self.require(Procedure::NodeCount)?;
        if let Some(cached) = &self.node_count {
            return Ok(cached.clone());
        }
        let mut value = 0i64;
        let status = self.engine.n_nodes(&mut value);
        let response = Response {
            payload: value,
            status,
        };
        debug!(value, status = status.raw(), "cached node count");
        self.node_count = Some(response.clone());
        Ok(response)
    }

    /// Number of stratigraphic layers, cached after the first engine call.
    pub fn layer_count(&mut self) -> Result<Response<i64>, EngineError> {
        self.require(Procedure::LayerCount)?;
        if let Some(cached) = &self.layer_count {
            return Ok(cached.clone());
        }
        let mut value = 0i64;
        let status = self.engine.n_layers(&mut value);
        let response = Response {
            payload: value,
            status,
        };
        debug!(value, status = status.raw(), "cached layer count");
        self.layer_count = Some(response.clone());
        Ok(response)
    }

    /// Number of simulation time steps, cached after the first engine call.
    pub fn time_step_count(&mut self) -> Result<Response<i64>, EngineError> {
        self.require(Procedure::TimeStepCount)?;
        if let Some(cached) = &self.time_step_count {
            return Ok(cached.clone());
        }
        let mut value = 0i64;
        let status = self.engine.n_time_steps(&mut value);
        let response = Response {
            payload: value,
            status,
        };
        debug!(value, status = status.raw(), "cached time step count");
        self.time_step_count = Some(response.clone());
        Ok(response)
    }

    /// Simulation begin/end dates and reporting interval.
    ///
    /// The time-step count sizes the date-table buffers, the engine fills
    /// them, and the decoded first and last stamps become the window. The
    /// *returned* entry count is decoded, never the requested capacity.
    #[tracing::instrument(skip(self))]
    pub fn time_window(&mut self) -> Result<Response<TimeWindow>, EngineError> {
        self.require(Procedure::TimeSpecs)?;
        let steps = self.time_step_count()?;
        let capacity = usize::try_from(steps.payload).unwrap_or(0);
        if capacity == 0 {
            return Err(EngineError::EmptyTimeSpecs);
        }

        let mut date_buffer = vec![0u8; capacity * DATE_TEXT_LEN];
        let mut offsets = vec![0i64; capacity];
        let mut n_dates = 0i64;
        let mut interval_buffer = [0u8; INTERVAL_TEXT_CAPACITY];
        let mut interval_len = 0i64;
        let status = self.engine.time_specs(
            &mut date_buffer,
            &mut offsets,
            &mut n_dates,
            &mut interval_buffer,
            &mut interval_len,
        );

        let logical = usize::try_from(n_dates).unwrap_or(0);
        let stamps = decode(&date_buffer, &offsets, logical)?;
        let begin = match stamps.first() {
            Some(text) => SimDate::parse(trim_wire(text))?,
            None => return Err(EngineError::EmptyTimeSpecs),
        };
        let end = match stamps.last() {
            Some(text) => SimDate::parse(trim_wire(text))?,
            None => return Err(EngineError::EmptyTimeSpecs),
        };

        let taken = usize::try_from(interval_len)
            .ok()
            .filter(|&len| len <= INTERVAL_TEXT_CAPACITY)
            .ok_or(EngineError::IntervalTextLength {
                reported: interval_len,
                capacity: INTERVAL_TEXT_CAPACITY,
            })?;
        let interval_text = String::from_utf8_lossy(&interval_buffer[..taken]);
        let interval = ReportingInterval::parse(interval_text.trim_end())?;

        debug!(%begin, %end, %interval, steps = logical, "decoded time window");
        Ok(Response {
            payload: TimeWindow {
                begin,
                end,
                interval,
                step_count: logical,
            },
            status,
        })
    }

    /// Names of every location of `kind`, trimmed of fixed-width padding.
    ///
    /// A dimension query sizes the buffers first; the decode then uses the
    /// count the engine actually returned. Both calls produce a status
    /// code and both are carried, the fill's on the response and the
    /// dimension query's on the [`NameTable`] payload.
    #[tracing::instrument(skip(self), fields(kind = ?kind))]
    pub fn location_names(
        &mut self,
        kind: LocationKind,
    ) -> Result<Response<NameTable>, EngineError> {
        self.require(Procedure::LocationNames)?;

        let mut entry_count = 0i64;
        let mut buffer_len = 0i64;
        let dims_status = self
            .engine
            .location_table_dims(kind, &mut entry_count, &mut buffer_len);

        let mut buffer = vec![0u8; usize::try_from(buffer_len).unwrap_or(0)];
        let mut offsets = vec![0i64; usize::try_from(entry_count).unwrap_or(0)];
        let mut returned = 0i64;
        let status = self
            .engine
            .location_names(kind, &mut buffer, &mut offsets, &mut returned);

        let logical = usize::try_from(returned).unwrap_or(0);
        let names = decode(&buffer, &offsets, logical)?
            .iter()
            .map(|name| trim_wire(name).to_string())
            .collect();
        Ok(Response {
            payload: NameTable { names, dims_status },
            status,
        })
    }

    /// One hydrograph time series over a validated request.
    ///
    /// [`count`] sizes the sample buffers (under-allocation would overflow
    /// inside the engine, so inclusion wins any ambiguity), the engine
    /// fills and scales them, and the epoch day offsets come back as
    /// [`SimDate`]s. Only the engine's returned sample count is kept; a
    /// count above the allocated capacity aborts the response.
    #[tracing::instrument(skip(self, request), fields(id = request.id(), kind = ?request.kind()))]
    pub fn hydrograph(
        &mut self,
        request: &HydrographRequest,
    ) -> Result<Response<Hydrograph>, EngineError> {
        self.require(Procedure::Hydrograph)?;

        let samples = count(
            request.begin(),
            request.end(),
            request.interval(),
            request.include_end(),
        )?;

        let begin_text = request.begin().to_string();
        let end_text = request.end().to_string();
        let interval_text = request.interval().to_string();
        let mut times = vec![0.0f64; samples];
        let mut values = vec![0.0f64; samples];
        let mut n_out = 0i64;
        let status = self.engine.hydrograph(
            request.kind(),
            request.id(),
            begin_text.as_bytes(),
            end_text.as_bytes(),
            interval_text.as_bytes(),
            request.factor().value(),
            &mut times,
            &mut values,
            &mut n_out,
        );

        let produced = usize::try_from(n_out)
            .ok()
            .filter(|&n| n <= samples)
            .ok_or(EngineError::SampleCount {
                reported: n_out,
                capacity: samples,
            })?;
        times.truncate(produced);
        values.truncate(produced);
        let dates = times.iter().map(|&t| SimDate::from_epoch_offset(t)).collect();
        debug!(requested = samples, produced, status = status.raw(), "decoded hydrograph");
        Ok(Response {
            payload: Hydrograph { dates, values },
            status,
        })
    }
}

/// Strips the NUL and blank padding of a fixed-width wire string.
///
/// The codec hands back exact bytes; padding removal is this caller's
/// concern, not the codec's.
fn trim_wire(text: &str) -> &str {
    text.trim_end_matches(['\0', ' '])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trim_wire_strips_padding_only() {
        assert_eq!(trim_wire("GW01  \0\0"), "GW01");
        assert_eq!(trim_wire("  indent"), "  indent");
        assert_eq!(trim_wire(""), "");
    }
}
