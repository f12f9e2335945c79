//! Engine capability resolution.
//!
//! Engine builds differ in which optional procedures they export. Instead
//! of probing per call, the full capability set is resolved once when the
//! handle is constructed, and every operation checks it before touching
//! the boundary.

use std::fmt;

use crate::api::EngineApi;

/// The engine procedures this layer wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Procedure {
    /// Simulation begin/end dates and reporting interval.
    TimeSpecs,
    /// Number of simulation time steps.
    TimeStepCount,
    /// Number of mesh nodes.
    NodeCount,
    /// Number of stratigraphic layers.
    LayerCount,
    /// Names or labels for a location kind.
    LocationNames,
    /// Time series at one hydrograph location.
    Hydrograph,
}

impl Procedure {
    /// Every wrapped procedure, in resolution order.
    pub const ALL: [Procedure; 6] = [
        Procedure::TimeSpecs,
        Procedure::TimeStepCount,
        Procedure::NodeCount,
        Procedure::LayerCount,
        Procedure::LocationNames,
        Procedure::Hydrograph,
    ];

    fn index(self) -> usize {
        match self {
            Procedure::TimeSpecs => 0,
            Procedure::TimeStepCount => 1,
            Procedure::NodeCount => 2,
            Procedure::LayerCount => 3,
            Procedure::LocationNames => 4,
            Procedure::Hydrograph => 5,
        }
    }
}

impl fmt::Display for Procedure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Procedure::TimeSpecs => "GetTimeSpecs",
            Procedure::TimeStepCount => "GetNTimeSteps",
            Procedure::NodeCount => "GetNNodes",
            Procedure::LayerCount => "GetNLayers",
            Procedure::LocationNames => "GetLocationNames",
            Procedure::Hydrograph => "GetHydrograph",
        };
        f.write_str(name)
    }
}

/// The procedure set one engine build exports, resolved once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capabilities {
    supported: [bool; 6],
}

impl Capabilities {
    /// Queries the engine for every wrapped procedure.
    pub fn resolve<E: EngineApi>(engine: &E) -> Self {
        let mut supported = [false; 6];
        for procedure in Procedure::ALL {
            supported[procedure.index()] = engine.has_procedure(procedure);
        }
        Self { supported }
    }

    /// `true` if the engine build exports `procedure`.
    pub fn supports(&self, procedure: Procedure) -> bool {
        self.supported[procedure.index()]
    }
}
