//! Placement request, plan, and diagnostic types

use serde::{Deserialize, Serialize};

/// Placement parameters taken from the command line
///
/// Zero means "unspecified" for both fields: an unspecified process count
/// defaults to one process per allocated slot, an unspecified per-node count
/// is derived from the host count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlacementRequest {
    /// Total number of processes to place
    pub process_count: usize,
    /// Target number of processes per node
    pub per_node: usize,
}

/// One host's share of the plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanEntry {
    /// Host name as it appeared in the allocation
    pub host: String,
    /// Number of processes to start on the host, always positive
    pub count: usize,
}

/// Ordered process-to-host placement plan
///
/// Entry order follows the hosts' first appearance in the allocation. Hosts
/// with nothing assigned are omitted entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementPlan {
    /// Plan entries in allocation order
    pub entries: Vec<PlanEntry>,
}

impl PlacementPlan {
    /// Total processes across all entries
    pub fn total_processes(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Number of hosts that received processes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no host received a process
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Non-fatal advisory produced while planning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic {
    /// No explicit process count was given; one per allocated slot assumed
    DefaultedProcessCount { count: usize },
    /// The requested per-node density needs more hosts than were allocated
    InsufficientHosts {
        hosts_needed: usize,
        hosts_available: usize,
    },
    /// Hosts ran out before every process was placed
    Unplaced { remaining: usize },
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::DefaultedProcessCount { count } => {
                write!(f, "no process count given, defaulting to {} (one per allocated slot)", count)
            }
            Diagnostic::InsufficientHosts {
                hosts_needed,
                hosts_available,
            } => {
                write!(
                    f,
                    "{} hosts needed for the requested per-node count but only {} allocated, placing best effort",
                    hosts_needed, hosts_available
                )
            }
            Diagnostic::Unplaced { remaining } => {
                write!(f, "{} processes could not be placed on the allocated hosts", remaining)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_totals() {
        let plan = PlacementPlan {
            entries: vec![
                PlanEntry {
                    host: "node1".to_string(),
                    count: 3,
                },
                PlanEntry {
                    host: "node2".to_string(),
                    count: 2,
                },
            ],
        };
        assert_eq!(plan.total_processes(), 5);
        assert_eq!(plan.len(), 2);
        assert!(!plan.is_empty());
    }

    #[test]
    fn test_empty_plan() {
        let plan = PlacementPlan::default();
        assert_eq!(plan.total_processes(), 0);
        assert!(plan.is_empty());
    }

    #[test]
    fn test_diagnostic_display() {
        let d = Diagnostic::InsufficientHosts {
            hosts_needed: 3,
            hosts_available: 2,
        };
        assert_eq!(
            d.to_string(),
            "3 hosts needed for the requested per-node count but only 2 allocated, placing best effort"
        );
    }
}
