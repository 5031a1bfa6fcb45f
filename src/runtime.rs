//! Async runtime selection
//!
//! The I/O backend is chosen once at process start and handed to
//! [`RuntimeConfig::build`]. Nothing here touches global state.

use crate::error::{RatesError, Result};
use std::fmt;
use std::str::FromStr;
use tokio::runtime::{Builder, Runtime};

/// Scheduler used to drive the batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RuntimeFlavor {
    /// All fetches multiplexed on the calling thread
    #[default]
    CurrentThread,
    /// Work-stealing pool
    MultiThread,
}

impl FromStr for RuntimeFlavor {
    type Err = RatesError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "current-thread" => Ok(RuntimeFlavor::CurrentThread),
            "multi-thread" => Ok(RuntimeFlavor::MultiThread),
            other => Err(RatesError::Runtime(format!("unknown runtime flavor: {}", other))),
        }
    }
}

impl fmt::Display for RuntimeFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeFlavor::CurrentThread => write!(f, "current-thread"),
            RuntimeFlavor::MultiThread => write!(f, "multi-thread"),
        }
    }
}

/// Startup configuration for the async runtime
#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    pub flavor: RuntimeFlavor,
    /// Worker count for [`RuntimeFlavor::MultiThread`]; tokio's default when `None`
    pub worker_threads: Option<usize>,
}

impl RuntimeConfig {
    pub fn new(flavor: RuntimeFlavor) -> Self {
        Self {
            flavor,
            worker_threads: None,
        }
    }

    /// Build the runtime with I/O and timers enabled
    pub fn build(&self) -> Result<Runtime> {
        let mut builder = match self.flavor {
            RuntimeFlavor::CurrentThread => Builder::new_current_thread(),
            RuntimeFlavor::MultiThread => {
                let mut builder = Builder::new_multi_thread();
                if let Some(workers) = self.worker_threads {
                    builder.worker_threads(workers);
                }
                builder
            }
        };

        builder
            .enable_all()
            .build()
            .map_err(|e| RatesError::Runtime(format!("Failed to start runtime: {}", e)))
    }
}
