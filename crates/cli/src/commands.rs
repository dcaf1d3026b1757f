//! Subcommand bodies. Each writes its artifact plus a provenance sidecar.

use anyhow::{Context, Result};
use rips::layout::{
    initial_points, next_layout, targets, Layout, LayoutCfg, ReplayToken, Transition,
};
use rips::{complex_with_cfg, SimplicialComplex, VrCfg};
use serde::Serialize;
use serde_json::{json, Map, Value};
use std::path::Path;

use crate::points::{read_points, write_points};
use crate::provenance::{write_sidecar, Payload};

pub struct SampleArgs {
    pub n: usize,
    pub seed: u64,
    pub index: u64,
    pub layout: Layout,
    pub layout_cfg: LayoutCfg,
}

pub struct AnimateArgs {
    pub n: usize,
    pub seed: u64,
    pub steps: u64,
    pub frames: usize,
    pub vr: VrCfg,
    pub layout_cfg: LayoutCfg,
}

/// One recomputed complex in an animation replay.
#[derive(Debug, Serialize)]
pub struct FrameRecord {
    pub step: u64,
    pub layout: &'static str,
    pub frame: usize,
    pub f_vector: Vec<usize>,
    pub euler_characteristic: i64,
}

fn layout_name(layout: Layout) -> &'static str {
    match layout {
        Layout::Random => "random",
        Layout::Shells => "shells",
    }
}

fn write_json(out: &Path, value: &impl Serialize) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", out.display()))
}

/// JSON view of a complex: vertex ids per simplex, keyed by dimension.
pub fn complex_json(cx: &SimplicialComplex, cfg: VrCfg) -> Value {
    let mut simplices = Map::new();
    for (dim, bucket) in cx.iter() {
        let ids: Vec<Vec<usize>> = bucket
            .iter()
            .map(|s| s.vertices().iter().map(|v| v.0).collect())
            .collect();
        simplices.insert(dim.to_string(), json!(ids));
    }
    json!({
        "max_dim": cfg.max_dim,
        "eta": cfg.eta,
        "f_vector": cx.f_vector(),
        "euler_characteristic": cx.euler_characteristic(),
        "simplices": simplices
    })
}

pub fn sample(args: SampleArgs, out: &Path, tag: Option<String>) -> Result<()> {
    args.layout_cfg.validate()?;
    let tok = ReplayToken {
        seed: args.seed,
        index: args.index,
    };
    let mut rng = tok.to_std_rng();
    let mut points = initial_points(args.n, &args.layout_cfg, &mut rng);
    if args.layout == Layout::Shells {
        let to = targets(Layout::Shells, args.n, &args.layout_cfg, &mut rng);
        points = Transition::new(points, to)?.at(1.0);
    }
    tracing::info!(n = args.n, layout = layout_name(args.layout), out = %out.display(), "sample");
    write_points(out, &points)?;
    write_sidecar(
        out,
        Payload::new(
            json!({
                "n": args.n,
                "seed": args.seed,
                "index": args.index,
                "layout": layout_name(args.layout),
            }),
            tag,
        ),
    )?;
    Ok(())
}

pub fn complex(input: &Path, cfg: VrCfg, out: &Path, tag: Option<String>) -> Result<()> {
    let points = read_points(input)?;
    let cx = complex_with_cfg(&points, cfg)
        .with_context(|| format!("computing complex of {}", input.display()))?;
    tracing::info!(
        points = points.len(),
        max_dim = cfg.max_dim,
        eta = cfg.eta,
        f_vector = ?cx.f_vector(),
        "complex"
    );
    write_json(out, &complex_json(&cx, cfg))?;
    write_sidecar(
        out,
        Payload::new(
            json!({
                "input": input.to_string_lossy(),
                "max_dim": cfg.max_dim,
                "eta": cfg.eta,
            }),
            tag,
        ),
    )?;
    Ok(())
}

/// Replay `steps` layout transitions, recomputing the complex on every frame.
pub fn animate_records(args: &AnimateArgs) -> Result<Vec<FrameRecord>> {
    args.layout_cfg.validate()?;
    args.vr.validate()?;
    let mut tok = ReplayToken {
        seed: args.seed,
        index: 0,
    };
    let mut points = initial_points(args.n, &args.layout_cfg, &mut tok.to_std_rng());
    let mut records = Vec::new();
    for step in 1..=args.steps {
        tok = tok.next();
        let layout = next_layout(step);
        let to = targets(layout, args.n, &args.layout_cfg, &mut tok.to_std_rng());
        let transition = Transition::new(points, to)?;
        let mut last = None;
        for (frame, pts) in transition.frames(args.frames).enumerate() {
            let cx = complex_with_cfg(&pts, args.vr)?;
            tracing::debug!(step, frame, f_vector = ?cx.f_vector(), "frame");
            records.push(FrameRecord {
                step,
                layout: layout_name(layout),
                frame,
                f_vector: cx.f_vector(),
                euler_characteristic: cx.euler_characteristic(),
            });
            last = Some(pts);
        }
        points = last.unwrap_or_default();
        tracing::info!(step, layout = layout_name(layout), frames = args.frames, "transition");
    }
    Ok(records)
}

pub fn animate(args: AnimateArgs, out: &Path, tag: Option<String>) -> Result<()> {
    let records = animate_records(&args)?;
    write_json(out, &records)?;
    write_sidecar(
        out,
        Payload::new(
            json!({
                "n": args.n,
                "seed": args.seed,
                "steps": args.steps,
                "frames": args.frames,
                "max_dim": args.vr.max_dim,
                "eta": args.vr.eta,
            }),
            tag,
        ),
    )?;
    Ok(())
}
