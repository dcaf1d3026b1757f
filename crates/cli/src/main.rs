use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use rips::layout::{Layout, LayoutCfg};
use rips::VrCfg;
use std::path::PathBuf;
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

mod commands;
mod points;
mod provenance;

use commands::{AnimateArgs, SampleArgs};
use provenance::Payload;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Vietoris-Rips complexes of point clouds")]
struct Cmd {
    /// Optional run tag; propagated to outputs and logs
    #[arg(long, global = true)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, ValueEnum)]
enum LayoutArg {
    Random,
    Shells,
}

impl From<LayoutArg> for Layout {
    fn from(l: LayoutArg) -> Self {
        match l {
            LayoutArg::Random => Layout::Random,
            LayoutArg::Shells => Layout::Shells,
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Draw a reproducible point cloud (CSV or .parquet)
    Sample {
        #[arg(long, default_value_t = 72)]
        n: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, value_enum, default_value_t = LayoutArg::Random)]
        layout: LayoutArg,
        /// Fix the shell count instead of drawing it
        #[arg(long)]
        shells: Option<usize>,
        #[arg(long)]
        out: PathBuf,
    },
    /// Compute the complex of a point table and write it as JSON
    Complex {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, default_value_t = VrCfg::default().max_dim)]
        max_dim: usize,
        #[arg(long, default_value_t = VrCfg::default().eta)]
        eta: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Replay layout transitions headlessly, recomputing the complex per frame
    Animate {
        #[arg(long, default_value_t = 72)]
        n: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 2)]
        steps: u64,
        #[arg(long, default_value_t = 30)]
        frames: usize,
        #[arg(long, default_value_t = VrCfg::default().max_dim)]
        max_dim: usize,
        #[arg(long, default_value_t = VrCfg::default().eta)]
        eta: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    SubscriberBuilder::default()
        .with_target(false)
        .with_env_filter(filter)
        .init();
    let cmd = Cmd::parse();
    if let Some(tag) = &cmd.tag {
        tracing::info!(tag, "tagged run");
    }
    match cmd.action {
        Action::Sample {
            n,
            seed,
            index,
            layout,
            shells,
            out,
        } => {
            let mut layout_cfg = LayoutCfg::default();
            if let Some(s) = shells {
                layout_cfg.shells_min = s;
                layout_cfg.shells_max = s;
            }
            let args = SampleArgs {
                n,
                seed,
                index,
                layout: layout.into(),
                layout_cfg,
            };
            commands::sample(args, &out, cmd.tag)
        }
        Action::Complex {
            input,
            max_dim,
            eta,
            out,
        } => commands::complex(&input, VrCfg { max_dim, eta }, &out, cmd.tag),
        Action::Animate {
            n,
            seed,
            steps,
            frames,
            max_dim,
            eta,
            out,
        } => {
            let args = AnimateArgs {
                n,
                seed,
                steps,
                frames,
                vr: VrCfg { max_dim, eta },
                layout_cfg: LayoutCfg::default(),
            };
            commands::animate(args, &out, cmd.tag)
        }
        Action::Report => report(cmd.tag),
    }
}

fn report(tag: Option<String>) -> Result<()> {
    let cfg = VrCfg::default();
    let payload = Payload::new(
        serde_json::json!({ "max_dim": cfg.max_dim, "eta": cfg.eta }),
        tag,
    );
    let obj = provenance::document(&payload, &[]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
