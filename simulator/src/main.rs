use anyhow::Context;
use clap::Parser;
use laplacecore::scene::Scene;
use rand::rngs::StdRng;
use rand::SeedableRng;
use render::render_figure;
use std::path::PathBuf;
use workflow::config::DemoConfig;
use workflow::report::TransformReport;
use workflow::runner::Runner;

mod render;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Laplace transform of a noisy target trajectory")]
struct Args {
    /// Load the demo config from YAML
    #[arg(long)]
    config: Option<PathBuf>,
    /// Where to write the figure (defaults to laplace_test.png)
    #[arg(long)]
    output: Option<PathBuf>,
    /// Seed for the signal noise and the target spawn
    #[arg(long)]
    seed: Option<u64>,
    /// Also write the transform values as JSON
    #[arg(long)]
    report: Option<PathBuf>,
    /// Skip rendering the figure
    #[arg(long, default_value_t = false)]
    no_plot: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(err) = run(args) {
        println!("Error during Laplace test: {:#}", err);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = match args.config {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::default(),
    }
    .with_overrides(args.output, args.seed);

    let runner = Runner::new(config.clone());
    let result = runner.execute().context("running Laplace workflow")?;

    println!("F(s) = {:?}", result.transform);

    if let Some(report_path) = args.report {
        TransformReport::new(config.t_max, config.dt, &result).write(&report_path)?;
        println!("Report saved as {}", report_path.display());
    }

    if !args.no_plot {
        let mut rng = match config.signal.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let scene = Scene::new(&mut rng);
        render_figure(&config, &result, &scene)?;
        println!("Plot saved as {}", config.output.display());
    }

    Ok(())
}
