// vim: tw=80
//! Device descriptors and role-pool validation

use std::{collections::BTreeSet, path::PathBuf};

use serde_derive::{Deserialize, Serialize};

use crate::types::{Error, Result, Size};

fn default_true() -> bool {
    true
}

/// Read-only view of one candidate block device.
///
/// Supplied by the inventory collaborator; the planner never inspects
/// hardware itself.  Capacities must be positive; the inventory layer
/// guarantees that before planning starts.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Device {
    /// Stable device node path, e.g. `/dev/sda`
    pub path:                PathBuf,
    /// Raw device capacity
    pub size:                Size,
    /// Logical volumes already carved from this device by a prior run.
    /// Each entry occupies one slot of its role.
    #[serde(default)]
    pub lvs:                 Vec<String>,
    /// May host new volumes at all
    #[serde(default = "default_true")]
    pub available:           bool,
    /// May host metadata (fast or very-fast) volumes
    #[serde(default = "default_true")]
    pub usable_for_metadata: bool,
}

impl Device {
    pub fn new<P: Into<PathBuf>>(path: P, size: Size) -> Self {
        Device {
            path:                path.into(),
            size,
            lvs:                 Vec::new(),
            available:           true,
            usable_for_metadata: true,
        }
    }

    /// Slots already consumed on this device by previous planning runs.
    pub fn occupied_slots(&self) -> u32 {
        self.lvs.len() as u32
    }
}

/// Verify that no device appears in both pools.
///
/// The planner runs this once per distinct pool pair before any allocation;
/// a violation aborts the whole run.
pub fn ensure_disjoint(primary: &[Device], secondary: &[Device])
    -> Result<()>
{
    let paths = primary.iter().map(|d| &d.path).collect::<BTreeSet<_>>();
    let overlap = secondary.iter()
        .filter(|d| paths.contains(&d.path))
        .map(|d| d.path.display().to_string())
        .collect::<Vec<_>>();
    if overlap.is_empty() {
        Ok(())
    } else {
        Err(Error::OverlappingDevices(overlap))
    }
}

// LCOV_EXCL_STOP
