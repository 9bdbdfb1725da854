mod provenance;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use polars::prelude::*;
use serde::Serialize;
use shapes::rand::{draw_triangles, SampleCfg};
use shapes::{Point2D, Shape, Triangle};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "shapes")]
#[command(about = "Triangle descriptions and reproducible triangle samples")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print a triangle and its reference point
    Describe {
        /// First corner as `x,y`
        #[arg(long, default_value = "0,0", allow_hyphen_values = true)]
        one: Point2D,
        /// Second corner as `x,y`
        #[arg(long, default_value = "1,0", allow_hyphen_values = true)]
        two: Point2D,
        /// Third corner as `x,y`
        #[arg(long, default_value = "0.5,1", allow_hyphen_values = true)]
        three: Point2D,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Draw random triangles and write them as CSV or Parquet, plus a provenance sidecar
    Sample {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        count: usize,
        #[arg(long, default_value_t = 1.0)]
        half_extent: f64,
        #[arg(long)]
        out: String,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Describe {
            one,
            two,
            three,
            json,
        } => describe(one, two, three, json),
        Action::Sample {
            seed,
            count,
            half_extent,
            out,
        } => sample(seed, count, half_extent, &out).map(|_| ()),
        Action::Report => report(),
    }
}

#[derive(Serialize)]
struct TriangleOut {
    one: [f64; 2],
    two: [f64; 2],
    three: [f64; 2],
    ref_point: [f64; 2],
}

impl From<&Triangle> for TriangleOut {
    fn from(t: &Triangle) -> Self {
        let xy = |p: Point2D| [p.x(), p.y()];
        Self {
            one: xy(t.one()),
            two: xy(t.two()),
            three: xy(t.three()),
            ref_point: xy(t.ref_point()),
        }
    }
}

fn describe(one: Point2D, two: Point2D, three: Point2D, json: bool) -> Result<()> {
    tracing::info!(%one, %two, %three, json, "describe");
    println!("{}", render(&Triangle::new(one, two, three), json)?);
    Ok(())
}

fn render(t: &Triangle, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(&TriangleOut::from(t))?)
    } else {
        Ok(t.describe())
    }
}

/// One row per triangle: corners then reference point.
fn triangles_frame(triangles: &[Triangle]) -> PolarsResult<DataFrame> {
    let col = |f: fn(&Triangle) -> f64| triangles.iter().map(f).collect::<Vec<f64>>();
    df!(
        "x1" => col(|t| t.one().x()),
        "y1" => col(|t| t.one().y()),
        "x2" => col(|t| t.two().x()),
        "y2" => col(|t| t.two().y()),
        "x3" => col(|t| t.three().x()),
        "y3" => col(|t| t.three().y()),
        "rx" => col(|t| t.ref_point().x()),
        "ry" => col(|t| t.ref_point().y())
    )
}

fn write_frame(df: &mut DataFrame, out: &Path) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    match out.extension().and_then(|e| e.to_str()) {
        Some("parquet") => {
            ParquetWriter::new(file).finish(df)?;
        }
        _ => {
            CsvWriter::new(file).include_header(true).finish(df)?;
        }
    }
    Ok(())
}

fn sample(seed: u64, count: usize, half_extent: f64, out: &str) -> Result<PathBuf> {
    tracing::info!(seed, count, half_extent, out, "sample");
    if count == 0 {
        bail!("--count must be at least 1");
    }
    let cfg = SampleCfg { half_extent };
    let triangles = draw_triangles(cfg, seed, count);
    let mut df = triangles_frame(&triangles)?;
    tracing::info!(rows = df.height(), cols = df.width(), "sample_frame");

    let out_path = Path::new(out);
    write_frame(&mut df, out_path)?;

    // Record the extent the sampler used, not the raw argument.
    let payload = provenance::Payload::new(serde_json::json!({
        "seed": seed,
        "count": count,
        "half_extent": cfg.extent()
    }));
    let prov = provenance::write_sidecar(out_path, payload)?;
    tracing::info!(out, provenance = %prov.display(), "sample_written");
    Ok(out_path.to_path_buf())
}

fn report() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&report_doc())?);
    Ok(())
}

fn report_doc() -> serde_json::Value {
    provenance::document(serde_json::json!({}), &[])
}
