// vim: tw=80
//! Batch storage-unit allocation planning.
//!
//! Given pools of raw or partially-used block devices, decide how many
//! storage units (OSDs) to create, which device backs each unit's data
//! volume, and how to share a smaller pool of faster devices across those
//! units for metadata volumes.  Planning is deterministic and idempotent:
//! devices already carrying volumes from a prior run absorb fewer new ones,
//! so repeated invocations converge instead of duplicating.

pub mod alloc;
pub mod device;
pub mod plan;
pub mod planner;
pub mod report;
pub mod types;

pub use crate::types::*;
