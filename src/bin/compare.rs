use anyhow::{bail, Context};
use clap::Parser;
use dotenv::dotenv;
use log::{info, LevelFilter};

use window_avg::{compare_strategies, generate_samples, join_samples, StrategyReport};

const BENCHMARK_SAMPLES: usize = 1 << 20;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Number of most recent samples averaged together
    #[clap(long, env = "WINDOW_SIZE", value_parser, default_value_t = 16)]
    window: usize,
    /// Length of the input stream, defaults to four windows
    #[clap(long, env = "SAMPLE_COUNT", value_parser)]
    samples: Option<usize>,
    #[clap(long, value_parser, default_value_t = 0)]
    seed: u64,
    /// Large run without per-step output
    #[clap(long, value_parser, default_value_t = false)]
    benchmark: bool,
    #[clap(long, value_parser, default_value_t = false)]
    json: bool,
}

fn print_steps(report: &StrategyReport<i32, i64>) {
    println!("{}", report.strategy);
    for step in &report.steps {
        println!("window: {}", join_samples(&step.window));
        println!("avg: {}", step.average);
    }
}

fn main() -> anyhow::Result<()> {
    let _ = env_logger::builder()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .try_init();

    dotenv().ok();

    let args = Args::parse();
    info!("{:?}", args);

    let size = match (args.samples, args.benchmark) {
        (Some(size), _) => size,
        (None, true) => BENCHMARK_SAMPLES,
        (None, false) => args.window.saturating_mul(4),
    };
    let samples = generate_samples(size, args.seed);
    let record_steps = !args.benchmark && !args.json;

    if record_steps {
        println!("input: {}", join_samples(&samples));
    }

    let comparison = compare_strategies::<i32, i64>(args.window, &samples, record_steps)
        .with_context(|| format!("averaging {size} samples over a window of {}", args.window))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&comparison)?);
    } else {
        if record_steps {
            print_steps(&comparison.incremental);
            println!();
            print_steps(&comparison.recompute);
            println!();
        }

        println!(
            "incremental averaging: {:.3}s",
            comparison.incremental.elapsed_secs
        );
        println!(
            "recompute averaging: {:.3}s",
            comparison.recompute.elapsed_secs
        );
        if let Some(speedup) = comparison.speedup() {
            println!("speedup: {speedup:.2}x");
        }
    }

    if !comparison.identical {
        bail!("incremental and recompute averages differ");
    }

    Ok(())
}
