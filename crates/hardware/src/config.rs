//! Configuration system for the simulator.
//!
//! This module defines the configuration structures used to parameterize the
//! core. It provides:
//! 1. **Defaults:** The baseline machine (64 physical registers, 32-entry active
//!    list and integer queue, 4-wide fetch/issue/commit).
//! 2. **Structures:** General run settings and pipeline sizing.
//! 3. **Validation:** Rejection of parameter combinations the core cannot model.
//!
//! Configuration is supplied as JSON (every field optional) or built with
//! `Config::default()`.

use serde::Deserialize;

use crate::common::constants;
use crate::common::error::ConfigError;

/// Default configuration constants for the simulator.
mod defaults {
    use crate::common::constants;

    /// Cycles after which a run is aborted.
    pub const CYCLE_LIMIT: u64 = constants::DEFAULT_CYCLE_LIMIT;

    /// PC the front end restarts from after exception recovery.
    pub const HANDLER_PC: usize = constants::EXCEPTION_HANDLER_PC;

    /// Instructions fetched per cycle.
    pub const FETCH_WIDTH: usize = constants::FETCH_WIDTH;

    /// Instructions issued per cycle.
    pub const ISSUE_WIDTH: usize = constants::ISSUE_WIDTH;

    /// Instructions committed per cycle.
    pub const COMMIT_WIDTH: usize = constants::COMMIT_WIDTH;

    /// Active list entries.
    pub const ACTIVE_LIST_SIZE: usize = constants::ACTIVE_LIST_SIZE;

    /// Integer queue entries.
    pub const INTEGER_QUEUE_SIZE: usize = constants::INTEGER_QUEUE_SIZE;

    /// Physical registers.
    pub const PHYS_REGS: usize = constants::PHYS_REGS;
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use ooosim_core::config::Config;
///
/// let json = r#"{
///     "general": { "cycle_limit": 200, "fault_pcs": [3] },
///     "pipeline": { "issue_width": 2 }
/// }"#;
///
/// let config: Config = serde_json::from_str(json).unwrap();
/// assert_eq!(config.general.cycle_limit, 200);
/// assert_eq!(config.general.fault_pcs, vec![3]);
/// assert_eq!(config.pipeline.issue_width, 2);
/// assert_eq!(config.pipeline.fetch_width, 4);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Pipeline widths and structure capacities
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the text is not a valid configuration.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Checks that the configuration describes a machine the core can model.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TooFewPhysicalRegisters`] when there is no
    /// register left to rename into, [`ConfigError::Zero`] for any zero
    /// width, capacity or cycle limit, and [`ConfigError::SmallerThanFetchBatch`]
    /// when the free pool, active list or integer queue cannot take a full
    /// fetch batch (dispatch is all-or-nothing, so the core would never drain).
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.pipeline;
        if p.phys_regs <= constants::ARCH_REGS {
            return Err(ConfigError::TooFewPhysicalRegisters {
                arch: constants::ARCH_REGS,
                phys: p.phys_regs,
            });
        }
        for (name, value) in [
            ("fetch_width", p.fetch_width),
            ("issue_width", p.issue_width),
            ("commit_width", p.commit_width),
            ("active_list_size", p.active_list_size),
            ("integer_queue_size", p.integer_queue_size),
        ] {
            if value == 0 {
                return Err(ConfigError::Zero(name));
            }
        }
        for (structure, capacity) in [
            ("free_list", p.phys_regs - constants::ARCH_REGS),
            ("active_list_size", p.active_list_size),
            ("integer_queue_size", p.integer_queue_size),
        ] {
            if capacity < p.fetch_width {
                return Err(ConfigError::SmallerThanFetchBatch {
                    structure,
                    capacity,
                    fetch_width: p.fetch_width,
                });
            }
        }
        if self.general.cycle_limit == 0 {
            return Err(ConfigError::Zero("cycle_limit"));
        }
        Ok(())
    }
}

/// General simulation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Safety cap on simulated cycles; reaching it aborts the run.
    #[serde(default = "GeneralConfig::default_cycle_limit")]
    pub cycle_limit: u64,

    /// PC the front end is redirected to after exception recovery.
    #[serde(default = "GeneralConfig::default_handler_pc")]
    pub handler_pc: usize,

    /// PCs whose instructions raise an exception when they issue.
    ///
    /// Empty by default: no instruction in the set faults on its own.
    #[serde(default)]
    pub fault_pcs: Vec<usize>,
}

impl GeneralConfig {
    fn default_cycle_limit() -> u64 {
        defaults::CYCLE_LIMIT
    }

    fn default_handler_pc() -> usize {
        defaults::HANDLER_PC
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            cycle_limit: Self::default_cycle_limit(),
            handler_pc: Self::default_handler_pc(),
            fault_pcs: Vec::new(),
        }
    }
}

/// Pipeline widths and structure capacities.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PipelineConfig {
    /// Instructions moved into the decode buffer per cycle
    #[serde(default = "PipelineConfig::default_fetch_width")]
    pub fetch_width: usize,

    /// Ready instructions selected from the integer queue per cycle
    #[serde(default = "PipelineConfig::default_issue_width")]
    pub issue_width: usize,

    /// Completed instructions retired from the active list head per cycle
    #[serde(default = "PipelineConfig::default_commit_width")]
    pub commit_width: usize,

    /// Active list (reorder buffer) capacity
    #[serde(default = "PipelineConfig::default_active_list_size")]
    pub active_list_size: usize,

    /// Integer queue capacity
    #[serde(default = "PipelineConfig::default_integer_queue_size")]
    pub integer_queue_size: usize,

    /// Physical register count; the first 32 start bound to `x0`..`x31`
    #[serde(default = "PipelineConfig::default_phys_regs")]
    pub phys_regs: usize,
}

impl PipelineConfig {
    fn default_fetch_width() -> usize {
        defaults::FETCH_WIDTH
    }

    fn default_issue_width() -> usize {
        defaults::ISSUE_WIDTH
    }

    fn default_commit_width() -> usize {
        defaults::COMMIT_WIDTH
    }

    fn default_active_list_size() -> usize {
        defaults::ACTIVE_LIST_SIZE
    }

    fn default_integer_queue_size() -> usize {
        defaults::INTEGER_QUEUE_SIZE
    }

    fn default_phys_regs() -> usize {
        defaults::PHYS_REGS
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            fetch_width: Self::default_fetch_width(),
            issue_width: Self::default_issue_width(),
            commit_width: Self::default_commit_width(),
            active_list_size: Self::default_active_list_size(),
            integer_queue_size: Self::default_integer_queue_size(),
            phys_regs: Self::default_phys_regs(),
        }
    }
}
