// vim: tw=80
//! Slot allocation: carving devices into per-role volume positions

use tracing::debug;

use crate::{
    device::Device,
    plan::VolSpec,
    types::{Size, VolKind},
};

/// How fast and very-fast volumes are sized.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FastSizing {
    /// Every volume gets exactly this size.
    Absolute(Size),
    /// Every volume gets an equal share of its device.
    Proportional,
}

impl FastSizing {
    fn size_for(self, dev: &Device, slots_per_device: u32) -> Size {
        match self {
            FastSizing::Absolute(size) => size,
            FastSizing::Proportional => {
                dev.size / u64::from(slots_per_device)
            }
        }
    }
}

/// Produce the data-volume specs for one planning run.
///
/// Every available device yields `osds_per_device` equally sized volumes,
/// in stable input order.  Unavailable devices yield nothing and never
/// count toward totals.
///
/// A non-empty `osd_ids` caps the total instead: ids attach to specs
/// first-to-first and surplus specs are dropped from the tail, so the
/// earliest devices keep their pairing with the fast pools.  Ids beyond the
/// producible spec count are ignored.
pub fn allocate_data(devices: &[Device], osds_per_device: u32,
                     osd_ids: &[u32]) -> Vec<(VolSpec, Option<u32>)>
{
    let mut specs = Vec::new();
    for dev in devices.iter().filter(|d| d.available) {
        let size = dev.size / u64::from(osds_per_device);
        debug!(path = %dev.path.display(), %size, osds_per_device,
            "planning data volumes");
        for _ in 0..osds_per_device {
            specs.push(VolSpec::new(dev.path.clone(), osds_per_device, size,
                VolKind::Data));
        }
    }
    if osd_ids.is_empty() {
        specs.into_iter().map(|spec| (spec, None)).collect()
    } else {
        specs.into_iter()
            .zip(osd_ids.iter())
            .map(|(spec, id)| (spec, Some(*id)))
            .collect()
    }
}

/// Distribute shared fast-device slots across the units that need them.
///
/// Devices that already host volumes absorb fewer new ones
/// (`remaining = slots_per_device − occupied`, floored at zero), which is
/// what makes repeated invocations converge instead of duplicating.  Stops
/// as soon as `needed` specs exist; returns fewer when the pool cannot
/// supply them.  Shortfall is the caller's postcondition to check, never an
/// error here, and the allocator never pads.
pub fn allocate_shared(devices: &[Device], kind: VolKind,
                       slots_per_device: u32, needed: usize,
                       sizing: FastSizing) -> Vec<VolSpec>
{
    let mut specs = Vec::with_capacity(needed);
    for dev in devices {
        if !dev.available || !dev.usable_for_metadata {
            debug!(path = %dev.path.display(), %kind,
                "skipping unusable device");
            continue;
        }
        let remaining =
            slots_per_device.saturating_sub(dev.occupied_slots());
        let size = sizing.size_for(dev, slots_per_device);
        debug!(path = %dev.path.display(), %kind, remaining, %size,
            "planning shared volumes");
        for _ in 0..remaining {
            if specs.len() >= needed {
                return specs;
            }
            specs.push(VolSpec::new(dev.path.clone(), slots_per_device,
                size, kind));
        }
    }
    specs
}

// LCOV_EXCL_STOP
