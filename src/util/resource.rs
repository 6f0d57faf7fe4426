//! Host CPU information
//!
//! Used to warn when more worker threads are requested than the machine can
//! run at once, which makes the parallel timing meaningless.

use std::fs;

/// Logical and physical core counts of the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuInfo {
    pub logical: usize,
    pub physical: usize,
}

impl CpuInfo {
    /// Detect core counts
    ///
    /// Counts `processor` lines in /proc/cpuinfo on Linux, falling back to
    /// the num_cpus crate elsewhere.
    pub fn detect() -> Self {
        let logical = Self::proc_cpuinfo_count().unwrap_or_else(num_cpus::get);
        Self {
            logical,
            physical: num_cpus::get_physical(),
        }
    }

    fn proc_cpuinfo_count() -> Option<usize> {
        let cpuinfo = fs::read_to_string("/proc/cpuinfo").ok()?;
        let count = cpuinfo
            .lines()
            .filter(|line| line.starts_with("processor"))
            .count();
        (count > 0).then_some(count)
    }

    /// Whether `workers` threads exceed the logical core count
    pub fn oversubscribed(&self, workers: usize) -> bool {
        workers > self.logical
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect() {
        let info = CpuInfo::detect();
        assert!(info.logical >= 1);
        assert!(info.physical >= 1);
    }

    #[test]
    fn test_oversubscribed() {
        let info = CpuInfo { logical: 4, physical: 2 };
        assert!(!info.oversubscribed(4));
        assert!(info.oversubscribed(5));
    }
}
