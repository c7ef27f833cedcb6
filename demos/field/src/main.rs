//! field — generate a random sensor field and compare aggregation energy.
//!
//! ```text
//! field [CONFIG.toml] [--edges]
//! ```
//!
//! Without a config file the defaults are used: a 50 × 50 field, 50 nodes,
//! Tr = 15, 1–10 packets per node, seed 42, BFS, random rendezvous.
//! `--edges` lists every component's links under its energy lines.
//! Set `RUST_LOG=debug` for generation and partition statistics.

use std::io;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};

use wsn_sim::{ReportWriter, RunConfig, SimBuilder};

struct Args {
    config:     Option<PathBuf>,
    show_links: bool,
}

fn parse_args() -> Result<Args> {
    let mut args = Args { config: None, show_links: false };
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--edges" => args.show_links = true,
            flag if flag.starts_with("--") => bail!("unknown flag {flag}"),
            path => {
                if args.config.is_some() {
                    bail!("more than one config file given");
                }
                args.config = Some(PathBuf::from(path));
            }
        }
    }
    Ok(args)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = parse_args()?;
    let config = match &args.config {
        Some(path) => RunConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => RunConfig::default(),
    };

    let net = &config.network;
    println!("=== field — wireless sensor network energy ===");
    println!(
        "Field: {} × {}  |  Nodes: {}  |  Tr: {}  |  Packets: {}..={}",
        net.width, net.length, net.node_count, net.tx_range, net.min_packets, net.max_packets
    );
    println!(
        "Seed: {}  |  Traversal: {}  |  Rendezvous: {:?}",
        config.seed, config.traversal, config.rendezvous
    );

    let t0 = Instant::now();
    let mut sim = SimBuilder::new(config).build()?;
    log::debug!(
        "generated {} nodes, {} links in {:.3} ms",
        sim.network.node_count(),
        sim.network.link_count(),
        t0.elapsed().as_secs_f64() * 1e3
    );

    let mut report = ReportWriter::new(io::stdout().lock()).with_links(args.show_links);
    let summary = sim.run(&mut report)?;
    if let Some(e) = report.take_error() {
        eprintln!("report error: {e}");
    }
    drop(report);

    println!();
    println!(
        "{} components, {} links; finished in {:.3} s",
        summary.components.len(),
        summary.link_count,
        t0.elapsed().as_secs_f64()
    );

    Ok(())
}
