// File: crates/demo/src/main.rs
// Summary: Demo loads multi-series CSV, sweeps a cursor across the time range and prints tooltips.
// Usage: hover-demo [data.csv] [config-file]   (config defaults to crates/demo/data/hover.toml)
// CSV header: `time,<label>[:stacked],...`; empty cells skip a point, `null` marks a gap.

mod demo_config;

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{Context, Result};
use hover_core::{
    stack, ChartEvent, EventBus, Insets, Interaction, Series, TextFormatter, TooltipFormatter, ViewState,
};
use tracing_subscriber::EnvFilter;

const PALETTE: [&str; 6] = ["#2196f3", "#4caf50", "#f44336", "#ffc107", "#607d8b", "#9c27b0"];
const WIDTH: i32 = 1024;
const HEIGHT: i32 = 640;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let raw = args.next().unwrap_or_else(|| "crates/demo/data/sample.csv".to_string());
    let cfg_path = args.next();

    let path = resolve_path(&raw)?;
    let cfg = demo_config::load(cfg_path.as_deref()).context("loading demo config")?;
    let settings = cfg.tooltip_settings()?;
    let formatter = TextFormatter::from_settings(&settings).with_offset(cfg.offset()?);
    tracing::info!(path = %path.display(), ?settings, "starting hover sweep");

    let mut series = load_series_csv(&path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    if series.is_empty() {
        anyhow::bail!("no series loaded; check the CSV header");
    }
    stack::apply(&mut series);
    let view = ViewState::from_series(&series);

    let series = Rc::new(RefCell::new(series));
    let controller = Rc::new(RefCell::new(Interaction::new(settings.hover_options())));
    let mut bus = EventBus::new();
    Interaction::attach(&controller, &mut bus, Rc::clone(&series));

    let insets = Insets::default();
    let plot_w = (WIDTH - insets.hsum() as i32) as f64;
    let steps = cfg.steps.max(1);
    for step in 0..steps {
        let px = insets.left as f64 + plot_w * step as f64 / (steps.max(2) - 1) as f64;
        let pos = view.to_data(px, (HEIGHT / 2) as f64, WIDTH, HEIGHT, &insets);
        // Individual mode only shows a tooltip for the series under the cursor; pick the first.
        let item = settings.tooltip_individual.then_some(0);
        bus.emit(&ChartEvent::Hover { pos, item });

        let ctl = controller.borrow();
        match ctl.tooltip() {
            Some(tooltip) => println!("--- x={:.0} highlights={:?}\n{}", pos.x, ctl.highlights(), formatter.format(tooltip)),
            None => println!("--- x={:.0} (no tooltip)", pos.x),
        }
    }

    bus.emit(&ChartEvent::Leave);
    let (from, to) = view.select_x(
        insets.left as f64 + plot_w * 0.25,
        insets.left as f64 + plot_w * 0.75,
        WIDTH,
        HEIGHT,
        &insets,
    );
    bus.emit(&ChartEvent::Select { from, to });
    if let Some(req) = controller.borrow_mut().take_time_window_request() {
        println!("time window request: {req:?}");
    }
    Ok(())
}

fn resolve_path(raw: &str) -> Result<PathBuf> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok(p.to_path_buf());
    }
    anyhow::bail!("file not found: {}", p.display());
}

/// One series per non-time column.
fn load_series_csv(path: &Path) -> Result<Vec<Series>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.clone();
    let mut series: Vec<Series> = headers
        .iter()
        .skip(1)
        .enumerate()
        .map(|(i, h)| {
            let (label, stacked) = match h.trim().strip_suffix(":stacked") {
                Some(label) => (label, true),
                None => (h.trim(), false),
            };
            Series::new(label, PALETTE[i % PALETTE.len()]).stacked(stacked)
        })
        .collect();
    tracing::debug!(columns = ?headers, "parsed header");

    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let Some(t) = rec.get(0).and_then(parse_time_millis) else {
            tracing::warn!(row, "skipping row without a valid time");
            continue;
        };
        for (s, cell) in series.iter_mut().zip(rec.iter().skip(1)) {
            let cell = cell.trim();
            if cell.is_empty() {
                continue;
            }
            let v = if cell.eq_ignore_ascii_case("null") {
                f64::NAN
            } else {
                cell.parse::<f64>().with_context(|| format!("row {row}: bad value '{cell}' for {}", s.label))?
            };
            s.data.push((t, v));
        }
    }
    for s in &mut series {
        s.data.sort_by(|a, b| a.0.total_cmp(&b.0));
    }
    Ok(series)
}

/// Epoch seconds or millis to millis.
fn parse_time_millis(s: &str) -> Option<f64> {
    let n = s.trim().parse::<i64>().ok()?;
    if n.abs() < 10_i64.pow(11) {
        Some(n as f64 * 1000.0)
    } else {
        Some(n as f64)
    }
}
