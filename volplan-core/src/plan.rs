// vim: tw=80
//! Planned storage units and the volumes that back them

use std::path::PathBuf;

use serde_derive::Serialize;

use crate::types::{Size, VolKind};

/// One volume to be carved out of a device.
///
/// Immutable once created; equality is structural.  `parts` is the total
/// number of same-role volumes sharing the device in this plan, and
/// `percentage` is always `1 / parts`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VolSpec {
    pub path:       PathBuf,
    pub parts:      u32,
    pub size:       Size,
    pub percentage: f64,
    pub kind:       VolKind,
}

impl VolSpec {
    pub fn new<P: Into<PathBuf>>(path: P, parts: u32, size: Size,
                                 kind: VolKind) -> Self
    {
        VolSpec {
            path: path.into(),
            parts,
            size,
            percentage: 1.0 / f64::from(parts),
            kind,
        }
    }
}

/// One planned storage unit: a data volume plus optional metadata volumes.
///
/// Sealed on construction; build one with [`OsdBuilder`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Osd {
    pub data:      VolSpec,
    #[serde(rename = "block_db", skip_serializing_if = "Option::is_none")]
    pub fast:      Option<VolSpec>,
    #[serde(rename = "block_wal", skip_serializing_if = "Option::is_none")]
    pub very_fast: Option<VolSpec>,
    #[serde(rename = "osd_id", skip_serializing_if = "Option::is_none")]
    pub id:        Option<u32>,
}

/// Two-phase construction of an [`Osd`]: metadata volumes may be attached
/// until `build`, after which the unit is immutable.
#[derive(Clone, Debug)]
pub struct OsdBuilder {
    data:      VolSpec,
    fast:      Option<VolSpec>,
    very_fast: Option<VolSpec>,
    id:        Option<u32>,
}

impl OsdBuilder {
    pub fn new(data: VolSpec, id: Option<u32>) -> Self {
        OsdBuilder {
            data,
            fast: None,
            very_fast: None,
            id,
        }
    }

    pub fn fast(mut self, spec: VolSpec) -> Self {
        self.fast = Some(spec);
        self
    }

    pub fn very_fast(mut self, spec: VolSpec) -> Self {
        self.very_fast = Some(spec);
        self
    }

    pub fn build(self) -> Osd {
        Osd {
            data:      self.data,
            fast:      self.fast,
            very_fast: self.very_fast,
            id:        self.id,
        }
    }
}

/// Pair each data volume, in order, with one fast and one very-fast volume
/// consumed from the front of their pools.
///
/// Metadata pools are optional accelerators: units left without one when a
/// pool runs dry are a valid outcome, not an error.  The OSD id travels
/// with its originating data spec.
pub fn build_plan(data: Vec<(VolSpec, Option<u32>)>, fast: Vec<VolSpec>,
                  very_fast: Vec<VolSpec>) -> Vec<Osd>
{
    let mut fast = fast.into_iter();
    let mut very_fast = very_fast.into_iter();
    data.into_iter()
        .map(|(spec, id)| {
            let mut builder = OsdBuilder::new(spec, id);
            if let Some(f) = fast.next() {
                builder = builder.fast(f);
            }
            if let Some(vf) = very_fast.next() {
                builder = builder.very_fast(vf);
            }
            builder.build()
        })
        .collect()
}

// LCOV_EXCL_STOP
