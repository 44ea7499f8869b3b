use chrono::NaiveDate;
use rust_xlsxwriter::{Format, Workbook};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{InventoryError, Result};
use crate::inventory::types::{DeviceRecord, COLUMNS, DATE_FORMAT};

pub const SHEET_NAME: &str = "Inventory";

/// `"<base> - YYYY-MM-DD.xlsx"`. The date appears once.
pub fn inventory_file_name(base: &str, date: NaiveDate) -> String {
    format!("{} - {}.xlsx", base.trim(), date.format(DATE_FORMAT))
}

/// Write `records` to `<output_dir>/<file name>` and return the path.
///
/// An empty slice still produces a workbook with the header row. A file of
/// the same name is replaced.
pub fn write_inventory(
    records: &[DeviceRecord],
    output_dir: &Path,
    base_name: &str,
    date: NaiveDate,
) -> Result<PathBuf> {
    if !output_dir.as_os_str().is_empty() && !output_dir.exists() {
        fs::create_dir_all(output_dir).map_err(|source| InventoryError::OutputDir {
            path: output_dir.to_path_buf(),
            source,
        })?;
    }

    let path = output_dir.join(inventory_file_name(base_name, date));

    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, name) in COLUMNS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *name, &header)?;
    }

    for (idx, record) in records.iter().enumerate() {
        let row = idx as u32 + 1;
        for (col, value) in record.row().iter().enumerate() {
            worksheet.write_string(row, col as u16, value.as_str())?;
        }
    }

    worksheet.set_freeze_panes(1, 0)?;
    worksheet.autofit();

    workbook.save(&path)?;
    tracing::debug!(path = %path.display(), rows = records.len(), "inventory written");
    Ok(path)
}
