//! Process placement decisions

use prun_core::{
    Diagnostic, HostAllocation, PlacementPlan, PlacementRequest, PlanEntry, PrunError, PrunResult,
};

/// Result of a planning pass: the plan plus any advisories raised on the way
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanOutcome {
    /// Ordered plan for the launcher
    pub plan: PlacementPlan,
    /// Non-fatal advisories, in the order they were raised
    pub diagnostics: Vec<Diagnostic>,
}

/// Strategy for distributing processes across an allocation
pub trait PlacementStrategy: Send + Sync {
    /// Compute a placement plan for a request against an allocation
    fn plan(
        &self,
        request: &PlacementRequest,
        allocation: &HostAllocation,
    ) -> PrunResult<PlanOutcome>;
}

/// Block distribution: fill each host up to the per-node count, in the order
/// hosts first appear in the allocation
pub struct BlockPlacement;

impl PlacementStrategy for BlockPlacement {
    fn plan(
        &self,
        request: &PlacementRequest,
        allocation: &HostAllocation,
    ) -> PrunResult<PlanOutcome> {
        let mut diagnostics = Vec::new();
        let total_slots = allocation.total_slots();
        let host_count = allocation.host_count();

        let process_count = if request.process_count == 0 {
            diagnostics.push(Diagnostic::DefaultedProcessCount { count: total_slots });
            total_slots
        } else {
            request.process_count
        };

        if process_count > total_slots {
            return Err(PrunError::Oversubscribed {
                requested: process_count,
                available: total_slots,
            });
        }

        if process_count == 0 {
            return Ok(PlanOutcome {
                plan: PlacementPlan::default(),
                diagnostics,
            });
        }

        // process_count <= total_slots and nonzero, so at least one host exists
        let per_node = if request.per_node == 0 {
            process_count.div_ceil(host_count)
        } else {
            request.per_node
        };

        let hosts_needed = process_count.div_ceil(per_node);
        if hosts_needed > host_count {
            diagnostics.push(Diagnostic::InsufficientHosts {
                hosts_needed,
                hosts_available: host_count,
            });
        }

        let mut entries = Vec::new();
        let mut remaining = process_count;
        for host in allocation.unique_hosts() {
            let assign = per_node.min(remaining);
            if assign == 0 {
                break;
            }
            entries.push(PlanEntry {
                host: host.to_string(),
                count: assign,
            });
            remaining -= assign;
            if remaining == 0 {
                break;
            }
        }

        if remaining > 0 {
            diagnostics.push(Diagnostic::Unplaced { remaining });
        }

        Ok(PlanOutcome {
            plan: PlacementPlan { entries },
            diagnostics,
        })
    }
}

/// Plan with the default block strategy
pub fn plan(request: &PlacementRequest, allocation: &HostAllocation) -> PrunResult<PlanOutcome> {
    BlockPlacement.plan(request, allocation)
}
