// vim: tw=80
//! Batch planning: from device pools to a complete plan

use tracing::warn;

use crate::{
    alloc::{allocate_data, allocate_shared, FastSizing},
    device::{ensure_disjoint, Device},
    plan::{build_plan, Osd},
    types::{Result, Size, VolKind},
};

/// Everything one planning run needs, gathered up front by the caller.
///
/// Planning is a pure function of this request: no clock, no randomness,
/// no I/O.  Concurrent runs over independent requests need no
/// synchronization.
#[derive(Clone, Debug)]
pub struct PlanRequest {
    /// Devices backing primary data volumes
    pub devices:         Vec<Device>,
    /// Fast devices shared for block_db volumes
    pub db_devices:      Vec<Device>,
    /// Very fast devices shared for block_wal volumes
    pub wal_devices:     Vec<Device>,
    /// Storage units to carve from each data device
    pub osds_per_device: u32,
    /// Reuse these unit ids instead of allocating fresh ones.  Non-empty
    /// lists cap the plan size.
    pub osd_ids:         Vec<u32>,
    /// block_db volumes per fast device
    pub db_slots:        u32,
    /// block_wal volumes per very fast device
    pub wal_slots:       u32,
    /// Fixed size for each block_db volume; equal shares when absent
    pub block_db_size:   Option<Size>,
    /// Fixed size for each block_wal volume; equal shares when absent
    pub block_wal_size:  Option<Size>,
    /// Encrypt the planned volumes.  Carried through to the report only;
    /// no effect on allocation.
    pub dmcrypt:         bool,
}

impl Default for PlanRequest {
    fn default() -> Self {
        PlanRequest {
            devices:         Vec::new(),
            db_devices:      Vec::new(),
            wal_devices:     Vec::new(),
            osds_per_device: 1,
            osd_ids:         Vec::new(),
            db_slots:        1,
            wal_slots:       1,
            block_db_size:   None,
            block_wal_size:  None,
            dmcrypt:         false,
        }
    }
}

/// The complete, ordered outcome of one planning run.
///
/// A non-zero shortfall means the corresponding fast pool could not cover
/// every storage unit: the plan is degraded but still valid, and the
/// trailing units simply lack that volume.
#[derive(Clone, Debug, PartialEq)]
pub struct Plan {
    pub osds:          Vec<Osd>,
    pub db_shortfall:  u32,
    pub wal_shortfall: u32,
}

impl Plan {
    pub fn len(&self) -> usize {
        self.osds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.osds.is_empty()
    }

    pub fn is_degraded(&self) -> bool {
        self.db_shortfall > 0 || self.wal_shortfall > 0
    }
}

/// Compute a plan for `request`.
///
/// Fails only on overlapping device pools; every other outcome, including
/// an empty plan, is a valid `Plan`.
pub fn plan(request: &PlanRequest) -> Result<Plan> {
    ensure_disjoint(&request.devices, &request.db_devices)?;
    ensure_disjoint(&request.devices, &request.wal_devices)?;
    ensure_disjoint(&request.db_devices, &request.wal_devices)?;

    let data = allocate_data(&request.devices, request.osds_per_device,
        &request.osd_ids);
    let needed = data.len();

    let db_sizing = request.block_db_size
        .map(FastSizing::Absolute)
        .unwrap_or(FastSizing::Proportional);
    let fast = allocate_shared(&request.db_devices, VolKind::BlockDb,
        request.db_slots, needed, db_sizing);
    let db_shortfall = shortfall(VolKind::BlockDb, &request.db_devices,
        needed, fast.len());

    let wal_sizing = request.block_wal_size
        .map(FastSizing::Absolute)
        .unwrap_or(FastSizing::Proportional);
    let very_fast = allocate_shared(&request.wal_devices, VolKind::BlockWal,
        request.wal_slots, needed, wal_sizing);
    let wal_shortfall = shortfall(VolKind::BlockWal, &request.wal_devices,
        needed, very_fast.len());

    let osds = build_plan(data, fast, very_fast);
    Ok(Plan {
        osds,
        db_shortfall,
        wal_shortfall,
    })
}

/// The shared allocators return short instead of erroring; an empty pool
/// means the operator never asked for that volume role at all.
fn shortfall(kind: VolKind, pool: &[Device], needed: usize, got: usize)
    -> u32
{
    if pool.is_empty() {
        return 0;
    }
    let missing = needed.saturating_sub(got) as u32;
    if missing > 0 {
        warn!(%kind, missing, "fast pool cannot cover every storage unit");
    }
    missing
}

// LCOV_EXCL_STOP
