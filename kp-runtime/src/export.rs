use anyhow::{anyhow, Result};
use kp_structs::core::OutputData;
use kp_utils::{compress_obj, jsonify, jsonify_pretty};
use std::{fmt::Write as _, fs, path::Path, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Table,
}

impl FromStr for Format {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "json" => Ok(Format::Json),
            "table" => Ok(Format::Table),
            other => Err(anyhow!("Unknown output format '{}'", other)),
        }
    }
}

pub fn render(output: &OutputData, format: Format, pretty: bool) -> Result<String> {
    match format {
        Format::Json if pretty => Ok(jsonify_pretty(output)?),
        Format::Json => Ok(jsonify(output)?),
        Format::Table => Ok(render_table(output)),
    }
}

/// The `item / weight / value` sheet of selected items followed by totals.
pub fn render_table(output: &OutputData) -> String {
    let result = output.result();
    let mut table = String::new();
    if result.is_empty() {
        table.push_str("No items selected: every item is too heavy or the list is empty.\n");
        return table;
    }

    let _ = writeln!(table, "{:>8} {:>12} {:>12}", "item", "weight", "value");
    for record in &result.records {
        let _ = writeln!(
            table,
            "{:>8} {:>12} {:>12}",
            record.item_position, record.weight, record.value
        );
    }
    let _ = writeln!(
        table,
        "{:>8} {:>12} {:>12}",
        "total", result.total_weight, result.total_value
    );
    table
}

/// Writes `output` to `path`, creating missing parent directories.
pub fn write_output(
    path: &Path,
    output: &OutputData,
    format: Format,
    compress: bool,
) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| anyhow!("Failed to create directory {:?}: {}", parent, e))?;
    }

    let bytes = match (format, compress) {
        (Format::Json, true) => compress_obj(output)?,
        (Format::Table, true) => return Err(anyhow!("Only json output can be compressed")),
        (format, false) => render(output, format, true)?.into_bytes(),
    };
    fs::write(path, bytes).map_err(|e| anyhow!("Failed to write {:?}: {}", path, e))
}
