//! TDEE Status Tool
//!
//! Provides runtime status information about the TDEE service.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildStamp;

/// Runtime status of the TDEE service
#[derive(Debug, Clone, Serialize)]
pub struct TdeeStatus {
    pub build: BuildStamp,

    /// Calculations answered since startup
    pub calculations_served: u64,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
#[derive(Debug)]
pub struct StatusTracker {
    start_time: Instant,
    calculations: AtomicU64,
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusTracker {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            calculations: AtomicU64::new(0),
        }
    }

    /// Count one successful calculation
    pub fn record_calculation(&self) {
        self.calculations.fetch_add(1, Ordering::Relaxed);
    }

    pub fn calculations_served(&self) -> u64 {
        self.calculations.load(Ordering::Relaxed)
    }

    /// Get the current status
    pub fn get_status(&self) -> TdeeStatus {
        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        TdeeStatus {
            build: BuildStamp::current(),
            calculations_served: self.calculations_served(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_calculations() {
        let tracker = StatusTracker::new();
        assert_eq!(tracker.calculations_served(), 0);
        tracker.record_calculation();
        tracker.record_calculation();

        let status = tracker.get_status();
        assert_eq!(status.calculations_served, 2);
        assert_eq!(status.process_id, std::process::id());
        assert_eq!(status.build, BuildStamp::current());
    }
}
