use anyhow::Result;
use clap::Parser;
use gausspf::debug::format_solution;
use gausspf::{load_case, runpf, GSOptBuilder, LogProgress, ProgressMonitor, Termination};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

/// Gauss-Seidel power flow.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The input case file (JSON)
    #[arg(required = true)]
    input: PathBuf,

    /// Write the solved network to this file (JSON)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of sweeps, or the upper bound on it when --tol is given.
    #[arg(long)]
    sweeps: Option<usize>,

    /// Stop once the largest voltage correction of a sweep is below this
    /// value (p.u.). Without it exactly --sweeps sweeps are run.
    #[arg(long)]
    tol: Option<f64>,

    /// Log the largest correction of every sweep.
    #[arg(long, default_value_t = false)]
    progress: bool,
}

fn main() {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    logger
        .format_level(false)
        .format_target(false)
        .format_timestamp(None);
    if let Some(level) = log_filter(&cli) {
        logger.filter_level(level);
    }
    logger.init();

    match execute(&cli) {
        Ok(_) => {
            std::process::exit(0);
        }
        Err(err) => {
            eprintln!("error: {:#}", err);
            std::process::exit(2);
        }
    }
}

/// Sweep progress is logged at `info`, which the default filter hides.
fn log_filter(cli: &Cli) -> Option<log::LevelFilter> {
    if cli.progress {
        Some(log::LevelFilter::Info)
    } else {
        None
    }
}

fn execute(cli: &Cli) -> Result<()> {
    let case = load_case(&cli.input)?;
    let y_bus = case.admittance()?;
    let spec = case.bus_specs()?;

    let mut builder = GSOptBuilder::default();
    if let Some(sweeps) = cli.sweeps {
        builder.max_sweeps(sweeps);
    }
    if let Some(tol) = cli.tol {
        builder.termination(Termination::Tolerance(tol));
    }
    let opt = builder.build()?;

    let monitor = LogProgress {};
    let progress: Option<&dyn ProgressMonitor> = if cli.progress {
        Some(&monitor)
    } else {
        None
    };
    let sol = runpf(&y_bus, &spec, &opt, progress)?;

    println!("{}", format_solution(&sol));

    if let Some(out_path) = &cli.output {
        let file = File::create(out_path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), &sol)?;
    }

    if cli.tol.is_some() && !sol.converged {
        return Err(anyhow::anyhow!("power flow did not converge"));
    }
    Ok(())
}
