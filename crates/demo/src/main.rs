// File: crates/demo/src/main.rs
// Summary: Demo runs the downsample plugin lifecycle (init, zoom, reset) over a CSV or synthetic
// series and writes each displayed result to CSV.

use anyhow::{Context, Result};
use chart_downsample::{
    Chart, ChartPlugin, DownsampleOverrides, DownsamplePlugin, Point, ReductionConfig, Sample, Series,
};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Usage: downsample-demo [input.csv|-] [options-json]
    let input = std::env::args().nth(1).filter(|s| s != "-");
    let options = std::env::args().nth(2);

    let overrides = match options.as_deref() {
        Some(json) => overrides_from(&ReductionConfig::from_json(json).context("parsing options JSON")?),
        None => DownsampleOverrides::default().enabled(true).threshold(500),
    };

    let (label, samples) = match &input {
        Some(raw) => {
            let path = Path::new(raw);
            let samples = load_series_csv(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            (path.file_stem().and_then(|s| s.to_str()).unwrap_or("series").to_string(), samples)
        }
        None => ("synthetic".to_string(), synthetic(10_000)),
    };
    info!(series = %label, points = samples.len(), "loaded input");
    if samples.is_empty() {
        anyhow::bail!("no samples loaded; check headers/delimiter.");
    }

    let mut chart = Chart::new();
    chart.add_series(Series::with_data(label.clone(), samples));
    let (t_min, t_max) = time_bounds(&chart.datasets[0])?;
    chart.set_scale(t_min, t_max);

    let plugin = DownsamplePlugin::new(overrides);

    // 1) Initial pass
    plugin.before_init(&mut chart);
    write_stage(&chart, &label, "init")?;

    // 2) Zoom into the middle fifth of the data
    let span = t_max - t_min;
    let (lo, hi) = (t_min + span * 2 / 5, t_min + span * 3 / 5);
    chart.set_scale(lo, hi);
    chart.set_time_range(lo, hi);
    plugin.before_update(&mut chart);
    write_stage(&chart, &label, "zoom")?;

    // 3) Reset the time range back to everything
    chart.set_scale(t_min, t_max);
    chart.reset_time_range();
    plugin.before_update(&mut chart);
    write_stage(&chart, &label, "reset")?;

    // 4) Manual trigger with a coarser threshold
    let coarse = (chart.config().threshold / 4).max(3);
    let report = chart.downsample(Some(coarse));
    for (index, err) in report.failures() {
        warn!(index, error = %err, "series failed");
    }
    write_stage(&chart, &label, "coarse")?;

    Ok(())
}

fn overrides_from(c: &ReductionConfig) -> DownsampleOverrides {
    DownsampleOverrides::default()
        .enabled(c.enabled)
        .threshold(c.threshold)
        .auto(c.auto)
        .on_init(c.on_init)
        .restore_original_data(c.restore_original_data)
        .prefer_original_data(c.prefer_original_data)
        .full_range_span_ms(c.full_range_span_ms)
}

fn synthetic(n: i64) -> Vec<Sample> {
    (0..n)
        .map(|t| {
            let x = t as f64;
            Point::new(t, x.sin() + (x * 0.002).sin() * 3.0)
        })
        .map(Sample::from)
        .collect()
}

fn time_bounds(series: &Series) -> Result<(i64, i64)> {
    let points = series.displayed_points().context("normalizing timestamps")?;
    let first = points.first().map(|p| p.t).unwrap_or(0);
    let last = points.last().map(|p| p.t).unwrap_or(first);
    Ok((first, last))
}

/// Load a two-column time/value CSV. Time cells are kept as text and normalized later.
fn load_series_csv(path: &Path) -> Result<Vec<Sample>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    info!(?headers, "csv headers");

    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_time = idx(&["t", "time", "timestamp", "date", "datetime", "open_time"]).unwrap_or(0);
    let i_value = idx(&["y", "value", "close", "price"]).unwrap_or(1);

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let (Some(t), Some(y)) = (rec.get(i_time), rec.get(i_value)) else { continue };
        match y.trim().parse::<f64>() {
            Ok(y) => out.push(Sample::new(t.trim(), y)),
            Err(_) => warn!(value = y, "skipping row with non-numeric value"),
        }
    }
    Ok(out)
}

/// Write the displayed data as target/out/downsampled_<label>_<stage>.csv.
fn write_stage(chart: &Chart, label: &str, stage: &str) -> Result<()> {
    let series = &chart.datasets[0];
    let points = series.displayed_points().context("normalizing timestamps")?;
    let out = out_path(label, stage)?;
    let mut wtr = csv::Writer::from_path(&out).with_context(|| format!("creating {}", out.display()))?;
    wtr.write_record(["t", "y"])?;
    for p in &points {
        wtr.write_record([p.t.to_string(), p.y.to_string()])?;
    }
    wtr.flush()?;
    info!(stage, shown = points.len(), path = %out.display(), "wrote stage");
    Ok(())
}

fn out_path(label: &str, stage: &str) -> Result<PathBuf> {
    let dir = PathBuf::from("target/out");
    std::fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;
    let clean: String = label.chars().map(|c| if c.is_ascii_alphanumeric() { c } else { '_' }).collect();
    Ok(dir.join(format!("downsampled_{clean}_{stage}.csv")))
}
