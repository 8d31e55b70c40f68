//! Host allocation parsing
//!
//! The external scheduler hands a job its allocation as a hostfile with one
//! line per allocated slot; a host appearing five times owns five slots. The
//! raw order is significant and is preserved end to end.

use std::collections::HashSet;
use std::path::Path;

use crate::error::{PrunError, PrunResult};

/// Ordered host allocation, one entry per allocated slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostAllocation {
    slots: Vec<String>,
}

impl HostAllocation {
    /// Create an allocation from raw slot entries
    pub fn new(slots: Vec<String>) -> Self {
        Self { slots }
    }

    /// Parse allocation lines, skipping blanks and `#` comments
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let slots = lines
            .into_iter()
            .filter_map(|line| {
                let host = line.as_ref().trim();
                if host.is_empty() || host.starts_with('#') {
                    None
                } else {
                    Some(host.to_string())
                }
            })
            .collect();
        Self { slots }
    }

    /// Read an allocation from a hostfile on disk
    pub fn from_file(path: &Path) -> PrunResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            PrunError::Allocation(format!("Failed to read hostfile {}: {}", path.display(), e))
        })?;
        Ok(Self::from_lines(content.lines()))
    }

    /// Raw slot entries in allocation order
    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    /// Number of allocated slots (duplicates counted)
    pub fn total_slots(&self) -> usize {
        self.slots.len()
    }

    /// Hosts in first-appearance order, deduplicated
    pub fn unique_hosts(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.slots
            .iter()
            .map(String::as_str)
            .filter(|host| seen.insert(*host))
            .collect()
    }

    /// Number of distinct hosts
    pub fn host_count(&self) -> usize {
        self.unique_hosts().len()
    }

    /// True when no slots are allocated
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_lines_counts_slots() {
        let alloc = HostAllocation::from_lines(["node1", "node1", "node2", "node2", "node2"]);
        assert_eq!(alloc.total_slots(), 5);
        assert_eq!(alloc.host_count(), 2);
    }

    #[test]
    fn test_unique_hosts_preserve_order() {
        let alloc = HostAllocation::from_lines(["b", "a", "b", "c", "a"]);
        assert_eq!(alloc.unique_hosts(), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_from_lines_skips_blanks_and_comments() {
        let alloc = HostAllocation::from_lines(["node1", "", "# spare rack", "  node2  ", "   "]);
        assert_eq!(alloc.slots(), &["node1".to_string(), "node2".to_string()]);
    }

    #[test]
    fn test_empty_allocation() {
        let alloc = HostAllocation::from_lines(Vec::<&str>::new());
        assert!(alloc.is_empty());
        assert_eq!(alloc.total_slots(), 0);
        assert_eq!(alloc.host_count(), 0);
    }

    #[test]
    fn test_from_file_missing() {
        let err = HostAllocation::from_file(Path::new("/nonexistent/hostfile")).unwrap_err();
        assert!(matches!(err, PrunError::Allocation(_)));
    }
}
