//! Point-cloud tables (`id,x,y`) on disk: CSV or Parquet, chosen by extension.

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use rips::Point2;
use std::fs::File;
use std::path::Path;

fn is_parquet(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("parquet")
}

/// Read points; ids come from the `id` column, coordinates from `x` and `y`.
pub fn read_points(path: &Path) -> Result<Vec<Point2>> {
    let lf = if is_parquet(path) {
        LazyFrame::scan_parquet(path, ScanArgsParquet::default())
            .with_context(|| format!("scanning {}", path.display()))?
    } else {
        LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(Some(100))
            .finish()
            .with_context(|| format!("scanning {}", path.display()))?
    };
    let df = lf
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    let ids = column_u64(&df, "id")?;
    let xs = column_f64(&df, "x")?;
    let ys = column_f64(&df, "y")?;
    tracing::debug!(rows = df.height(), path = %path.display(), "points_read");
    ids.into_iter()
        .zip(xs)
        .zip(ys)
        .map(|((id, x), y)| {
            let id = usize::try_from(id).with_context(|| format!("id {id} does not fit usize"))?;
            Ok(Point2::xy(id, x, y))
        })
        .collect()
}

/// Write points as a table with columns `id,x,y`.
pub fn write_points(path: &Path, points: &[Point2]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    let ids: Vec<u64> = points.iter().map(|p| p.id.0 as u64).collect();
    let xs: Vec<f64> = points.iter().map(|p| p.pos.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.pos.y).collect();
    let mut df = df!("id" => ids, "x" => xs, "y" => ys)?;
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    if is_parquet(path) {
        ParquetWriter::new(&mut file).finish(&mut df)?;
    } else {
        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(&mut df)?;
    }
    Ok(())
}

fn column_f64(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let col = df
        .column(name)
        .with_context(|| format!("missing column `{name}`"))?
        .cast(&DataType::Float64)?;
    col.f64()?
        .into_iter()
        .enumerate()
        .map(|(row, v)| v.with_context(|| format!("null `{name}` at row {row}")))
        .collect()
}

fn column_u64(df: &DataFrame, name: &str) -> Result<Vec<u64>> {
    let col = df
        .column(name)
        .with_context(|| format!("missing column `{name}`"))?;
    if col.dtype().is_float() {
        bail!("column `{name}` must hold integers");
    }
    let col = col.cast(&DataType::UInt64)?;
    col.u64()?
        .into_iter()
        .enumerate()
        .map(|(row, v)| v.with_context(|| format!("null or negative `{name}` at row {row}")))
        .collect()
}
