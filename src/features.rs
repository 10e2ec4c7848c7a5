//! Feature selection for a new project, validated once and passed around by value.

use crate::error::CreatorError;

/// Where the trace recorder keeps its buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceMode {
    Off,
    /// Buffer in the on-chip SRAM.
    Sram,
    /// Buffer in the external PSRAM.
    Psram,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Features {
    rtos: bool,
    trace: TraceMode,
}

impl Features {
    /// Check the raw command line switches and turn them into a feature set.
    ///
    /// Tracing is a FreeRTOS feature, so it can not be combined with a bare metal
    /// project, and only one trace buffer location may be chosen.
    pub fn validate(no_rtos: bool, trace: bool, trace_psram: bool) -> Result<Self, CreatorError> {
        if (trace || trace_psram) && no_rtos {
            return Err(CreatorError::ConflictingFlags(
                "Trace can only be enabled with FreeRTOS enabled",
            ));
        }
        if trace && trace_psram {
            return Err(CreatorError::ConflictingFlags(
                "trace and tracePSRAM are set, only one option is allowed at a time",
            ));
        }
        let trace = match (trace, trace_psram) {
            (_, true) => TraceMode::Psram,
            (true, false) => TraceMode::Sram,
            (false, false) => TraceMode::Off,
        };
        Ok(Self {
            rtos: !no_rtos,
            trace,
        })
    }

    pub fn rtos(&self) -> bool {
        self.rtos
    }

    pub fn no_rtos(&self) -> bool {
        !self.rtos
    }

    pub fn trace_enabled(&self) -> bool {
        self.trace != TraceMode::Off
    }

    pub fn trace_psram(&self) -> bool {
        self.trace == TraceMode::Psram
    }
}

impl Default for Features {
    fn default() -> Self {
        Self {
            rtos: true,
            trace: TraceMode::Off,
        }
    }
}
