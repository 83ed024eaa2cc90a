//! Snapshot trace of a run.
//!
//! A [`Trace`] holds the initial state followed by the state after every
//! simulated cycle, plus how the run ended. Its JSON form (the snapshot list
//! only) is the simulator's output format.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::common::error::SimError;
use crate::core::ProcessorState;
use crate::stats::SimStats;

/// How a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The stream was exhausted and every in-flight instruction retired.
    Drained,
    /// The cycle safety cap was hit first; the trace stops at the cap.
    CycleLimitReached {
        /// The cap that was hit.
        limit: u64,
    },
}

/// Snapshots, outcome and statistics of a run.
#[derive(Clone, Debug, PartialEq)]
pub struct Trace {
    /// State before cycle 0, then after each cycle.
    pub snapshots: Vec<ProcessorState>,
    /// How the run ended.
    pub outcome: Outcome,
    /// Counters accumulated over the run.
    pub stats: SimStats,
}

impl Trace {
    /// Whether the run drained normally.
    pub const fn is_drained(&self) -> bool {
        matches!(self.outcome, Outcome::Drained)
    }

    /// State after the last simulated cycle.
    pub fn final_state(&self) -> Option<&ProcessorState> {
        self.snapshots.last()
    }

    /// Converts an aborted run into [`SimError::CycleLimit`].
    ///
    /// # Errors
    ///
    /// Returns [`SimError::CycleLimit`] when the cycle cap was reached.
    pub fn check_outcome(&self) -> Result<(), SimError> {
        match self.outcome {
            Outcome::Drained => Ok(()),
            Outcome::CycleLimitReached { limit } => Err(SimError::CycleLimit { limit }),
        }
    }

    /// Serializes the snapshot list as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error on a failed write.
    pub fn write_json<W: Write>(&self, writer: W) -> Result<(), serde_json::Error> {
        serde_json::to_writer_pretty(writer, &self.snapshots)
    }

    /// Writes the snapshot list to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Io`] if the file cannot be created or flushed and
    /// [`SimError::Json`] if encoding fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SimError> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_json(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
