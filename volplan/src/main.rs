// vim: tw=80
//! Plan batch creation of storage units across pools of block devices.
//!
//! Reads a device inventory file, computes a deterministic allocation plan,
//! and prints it in human or JSON form.  Never touches the devices
//! themselves; creating the volumes is a separate tool's job.

use std::{
    fs,
    path::{Path, PathBuf},
    process::exit,
};

use clap::{crate_version, Parser};
use serde_derive::Deserialize;
use tracing_subscriber::EnvFilter;
use volplan_core::{
    device::Device,
    planner::{self, PlanRequest},
    report::{self, Format, ReportContext},
    Result,
    Size,
};

/// The three role pools, as enumerated by the inventory collaborator.
#[derive(Debug, Default, Deserialize)]
struct Inventory {
    /// Devices backing primary data volumes
    #[serde(default)]
    devices:     Vec<Device>,
    /// Fast devices shared for block_db volumes
    #[serde(default)]
    db_devices:  Vec<Device>,
    /// Very fast devices shared for block_wal volumes
    #[serde(default)]
    wal_devices: Vec<Device>,
}

#[derive(Parser, Clone, Debug)]
#[clap(version = crate_version!())]
/// Plan batch creation of storage units across device pools
struct Cli {
    /// Device inventory file (YAML)
    #[clap(short, long)]
    inventory:       PathBuf,
    /// Storage units to create per data device
    #[clap(long, default_value_t = 1)]
    osds_per_device: u32,
    /// Reuse these unit ids instead of allocating new ones, comma
    /// delimited.  Caps the plan size.
    #[clap(long, value_delimiter(','))]
    osd_ids:         Vec<u32>,
    /// block_db volumes per fast device
    #[clap(long, default_value_t = 1)]
    db_slots:        u32,
    /// block_wal volumes per very fast device
    #[clap(long, default_value_t = 1)]
    wal_slots:       u32,
    /// Fixed size for each block_db volume, e.g. 2G
    #[clap(long)]
    block_db_size:   Option<Size>,
    /// Fixed size for each block_wal volume
    #[clap(long)]
    block_wal_size:  Option<Size>,
    /// Encrypt the planned volumes
    #[clap(long)]
    dmcrypt:         bool,
    /// Cluster fsid to stamp on the report
    #[clap(long)]
    fsid:            Option<String>,
    /// Report format
    #[clap(long, default_value = "pretty")]
    format:          Format,
}

fn load_inventory(path: &Path) -> Inventory {
    let text = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Cannot read {}: {e}", path.display());
        exit(1);
    });
    serde_yaml_ng::from_str(&text).unwrap_or_else(|e| {
        eprintln!("Cannot parse {}: {e}", path.display());
        exit(1);
    })
}

fn run(cli: Cli) -> Result<String> {
    let inventory = load_inventory(&cli.inventory);
    let request = PlanRequest {
        devices:         inventory.devices,
        db_devices:      inventory.db_devices,
        wal_devices:     inventory.wal_devices,
        osds_per_device: cli.osds_per_device,
        osd_ids:         cli.osd_ids,
        db_slots:        cli.db_slots,
        wal_slots:       cli.wal_slots,
        block_db_size:   cli.block_db_size,
        block_wal_size:  cli.block_wal_size,
        dmcrypt:         cli.dmcrypt,
    };
    let plan = planner::plan(&request)?;
    let ctx = ReportContext {
        fsid:          cli.fsid,
        dmcrypt:       cli.dmcrypt,
        block_db_size: cli.block_db_size,
    };
    report::render(&plan, cli.format, &ctx)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let cli: Cli = Cli::parse();
    match run(cli) {
        Ok(rendered) => println!("{}", rendered.trim_end()),
        Err(e) => {
            eprintln!("{e}");
            exit(1);
        }
    }
}

// LCOV_EXCL_STOP
