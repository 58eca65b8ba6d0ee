// vim: tw=80
//! Structured and human-readable plan reports

use std::{fmt::Write as _, str::FromStr};

use crate::{
    plan::{Osd, VolSpec},
    planner::Plan,
    types::{Error, Result, Size},
};

/// Output encodings for a plan report.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Format {
    /// Fixed-width human summary
    #[default]
    Pretty,
    /// Compact JSON
    Json,
    /// Indented JSON
    JsonPretty,
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "pretty" => Ok(Format::Pretty),
            "json" => Ok(Format::Json),
            "json-pretty" => Ok(Format::JsonPretty),
            _ => Err(Error::InvalidFormat(s.to_string())),
        }
    }
}

/// Inputs the report needs beyond the plan itself.
///
/// The cluster fsid arrives from the configuration collaborator as an
/// explicit parameter; the serializer reads no ambient state.  Every field
/// may be absent without breaking rendering.
#[derive(Clone, Debug, Default)]
pub struct ReportContext {
    pub fsid:          Option<String>,
    pub dmcrypt:       bool,
    pub block_db_size: Option<Size>,
}

/// Render `plan` in the requested format.
///
/// JSON output is always syntactically valid; an empty plan renders as an
/// empty list, never as null and never as an error.  Rendering is
/// read-only over the plan and does not re-run allocation.
pub fn render(plan: &Plan, format: Format, ctx: &ReportContext)
    -> Result<String>
{
    match format {
        Format::Json => serde_json::to_string(&plan.osds)
            .map_err(|e| Error::Render(e.to_string())),
        Format::JsonPretty => serde_json::to_string_pretty(&plan.osds)
            .map_err(|e| Error::Render(e.to_string())),
        Format::Pretty => Ok(pretty(plan, ctx)),
    }
}

fn pretty(plan: &Plan, ctx: &ReportContext) -> String {
    let mut out = String::new();
    if let Some(fsid) = &ctx.fsid {
        writeln!(out, "Cluster fsid: {fsid}").unwrap();
    }
    if ctx.dmcrypt {
        writeln!(out, "Encryption: dmcrypt").unwrap();
    }
    if let Some(size) = ctx.block_db_size {
        writeln!(out, "Requested block_db size: {size}").unwrap();
    }
    writeln!(out, "Total OSDs: {}", plan.osds.len()).unwrap();
    if plan.db_shortfall > 0 {
        writeln!(out, "Units without block_db: {}", plan.db_shortfall)
            .unwrap();
    }
    if plan.wal_shortfall > 0 {
        writeln!(out, "Units without block_wal: {}", plan.wal_shortfall)
            .unwrap();
    }
    if plan.osds.is_empty() {
        return out;
    }
    let mut table = tabular::Table::new("  {:<}  {:<}  {:>}  {:>}");
    table.add_row(tabular::Row::new()
        .with_cell("TYPE")
        .with_cell("PATH")
        .with_cell("SIZE")
        .with_cell("%"));
    for osd in &plan.osds {
        add_volume_row(&mut table, &osd.data);
        if let Some(spec) = &osd.fast {
            add_volume_row(&mut table, spec);
        }
        if let Some(spec) = &osd.very_fast {
            add_volume_row(&mut table, spec);
        }
    }
    out.push_str(&table.to_string());
    out
}

fn add_volume_row(table: &mut tabular::Table, spec: &VolSpec) {
    table.add_row(tabular::Row::new()
        .with_cell(spec.kind)
        .with_cell(spec.path.display())
        .with_cell(spec.size)
        .with_cell(format!("{:.2}%", spec.percentage * 100.0)));
}

/// The JSON shape of a plan: a list of unit objects, each with a `data`
/// volume and optional `block_db`/`block_wal` volumes of the same shape.
pub fn to_json_value(osds: &[Osd]) -> Result<serde_json::Value> {
    serde_json::to_value(osds).map_err(|e| Error::Render(e.to_string()))
}

// LCOV_EXCL_STOP
