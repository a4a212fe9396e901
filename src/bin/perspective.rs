use std::{
    fs::File,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use perspective::{
    BinLog, EventFilter, VisKind, VisParams,
    feed::{ErrorClassifier, convert_csv, success_rate},
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "perspective", version)]
struct Cli {
    /// Log progress and statistics to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a binary event log as a PNG.
    Render(RenderArgs),
    /// Convert a CSV export into a binary event log.
    CsvConvert(CsvConvertArgs),
    /// Print the success rate of completed events in a binary event log.
    SuccessRate(SuccessRateArgs),
}

#[derive(Args, Debug)]
struct FilterArgs {
    /// Only events of this type.
    #[arg(long)]
    event_type: Option<u8>,

    /// Only events from this region.
    #[arg(long)]
    region: Option<u8>,

    /// Status bitmask: 4 done, 2 failed, 1 running. Negative selects all.
    #[arg(long, default_value_t = -1, allow_negative_numbers = true)]
    status_filter: i32,

    /// Exclusive lower bound on start time, in seconds since the epoch.
    #[arg(long, allow_negative_numbers = true)]
    min_time: Option<i64>,

    /// Exclusive upper bound on start time, in seconds since the epoch.
    #[arg(long, allow_negative_numbers = true)]
    max_time: Option<i64>,
}

impl FilterArgs {
    fn to_filter(&self, defaults: (i64, i64)) -> EventFilter {
        EventFilter {
            min_time: self.min_time.unwrap_or(defaults.0),
            max_time: self.max_time.unwrap_or(defaults.1),
            event_type: self.event_type,
            region: self.region,
            status_mask: self.status_filter,
        }
    }
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Visualization to draw.
    #[arg(long, value_enum)]
    kind: VisKind,

    /// Input binary event log.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Parameters JSON; flags below override its values.
    #[arg(long)]
    params: Option<PathBuf>,

    /// Only scan this many trailing records (0 for all).
    #[arg(long, default_value_t = 0)]
    lookback: u64,

    /// Canvas width, in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height, in pixels.
    #[arg(long)]
    height: Option<u32>,

    /// Background gray level.
    #[arg(long)]
    background: Option<u8>,

    /// Number of vertical grid divisions.
    #[arg(long)]
    x_grid: Option<u32>,

    /// Pixels over which run time doubles.
    #[arg(long)]
    run_time_scale: Option<f64>,

    /// Identical hits needed to saturate a color.
    #[arg(long)]
    color_steps: Option<f64>,

    /// Decay factor for line smoothing.
    #[arg(long)]
    resonance: Option<f64>,

    /// Any instant at the start of a period (polar kinds).
    #[arg(long, allow_negative_numbers = true)]
    period_start: Option<i64>,

    /// Period length, in seconds (polar kinds).
    #[arg(long)]
    period_length: Option<i64>,

    /// Jitter seed, for reproducible output.
    #[arg(long)]
    seed: Option<u64>,

    #[command(flatten)]
    filter: FilterArgs,
}

#[derive(Parser, Debug)]
struct CsvConvertArgs {
    /// Input CSV: `event_id,event_type,start,run,exit_status,error_reason`.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output binary event log.
    #[arg(long)]
    out: PathBuf,

    /// Error classes, one `regex | description` per line.
    #[arg(long)]
    error_classes: Option<PathBuf>,

    #[command(flatten)]
    filter: FilterArgs,
}

#[derive(Parser, Debug)]
struct SuccessRateArgs {
    /// Input binary event log.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Only scan this many trailing records (0 for all).
    #[arg(long, default_value_t = 0)]
    lookback: u64,

    #[command(flatten)]
    filter: FilterArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::CsvConvert(args) => cmd_csv_convert(args),
        Command::SuccessRate(args) => cmd_success_rate(args),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "perspective=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_params(args: &RenderArgs) -> anyhow::Result<VisParams> {
    let mut p = match &args.params {
        Some(path) => VisParams::from_json_path(path)?,
        None => VisParams::default(),
    };
    macro_rules! overlay {
        ($($field:ident),*) => {
            $(if let Some(v) = args.$field { p.$field = v; })*
        };
    }
    overlay!(
        width,
        height,
        background,
        x_grid,
        run_time_scale,
        color_steps,
        resonance,
        period_start
    );
    if let Some(t) = args.filter.min_time {
        p.min_time = t;
    }
    if let Some(t) = args.filter.max_time {
        p.max_time = t;
    }
    if args.period_length.is_some() {
        p.period_length = args.period_length;
    }
    if args.seed.is_some() {
        p.seed = args.seed;
    }
    Ok(p)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let params = load_params(&args)?;
    let filter = args.filter.to_filter((params.min_time, params.max_time));
    let stats = perspective::render_binlog_to_png(
        args.kind,
        &params,
        &filter,
        &args.in_path,
        args.lookback,
        &args.out,
    )?;
    tracing::info!(recorded = stats.recorded, skipped = stats.skipped, "rendered");
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_csv_convert(args: CsvConvertArgs) -> anyhow::Result<()> {
    let classifier = match &args.error_classes {
        Some(path) => ErrorClassifier::from_config_path(path)?,
        None => ErrorClassifier::blank_only()?,
    };
    let input = open(&args.in_path)?;
    ensure_parent(&args.out)?;
    let output = File::create(&args.out)
        .with_context(|| format!("create event log '{}'", args.out.display()))?;
    let filter = args.filter.to_filter((i64::MIN, i64::MAX));
    let stats = convert_csv(input, output, &filter, &classifier)?;
    eprintln!(
        "wrote {} ({} events, {} skipped, {} error classes)",
        args.out.display(),
        stats.written,
        stats.skipped,
        classifier.classes()
    );
    Ok(())
}

fn cmd_success_rate(args: SuccessRateArgs) -> anyhow::Result<()> {
    let log = BinLog::open(&args.in_path, args.lookback)?;
    let filter = args.filter.to_filter((i64::MIN, i64::MAX));
    match success_rate(log.events(), &filter) {
        Some(rate) => println!("{rate:.3}%"),
        None => println!("NaN%"),
    }
    Ok(())
}

fn open(path: &Path) -> anyhow::Result<File> {
    File::open(path).with_context(|| format!("open '{}'", path.display()))
}

fn ensure_parent(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}
