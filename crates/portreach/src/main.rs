use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use log::{error, info};
use memmap2::MmapOptions;
use portreach::{
    Error,
    input::Problem,
    query::{self, MissingPortPolicy},
    report::{self, ReportFormat},
};

/// Count the ports that are reachable from a start port, but not within
/// its maximum number of hops (MNP).
#[derive(Parser)]
#[command(version)]
struct Cli {
    /// Problem file: edge count, edges, query count, queries.
    in_file: PathBuf,

    /// Write the report to <FILE> instead of stdout.
    #[arg(short = 'o', long, value_name = "FILE")]
    out_file: Option<PathBuf>,

    /// Report format.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Leave out queries whose port is not in the graph instead of failing.
    #[arg(short, long)]
    skip_missing: bool,

    /// Evaluate queries on all cores.
    #[arg(short, long)]
    parallel: bool,

    /// Log the adjacency matrix.
    #[arg(long)]
    dump_graph: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Error> {
    info!("Reading problem from {:?}", cli.in_file);
    let in_file = File::open(&cli.in_file)?;
    // The file is only read while mapped.
    let in_file_mmap = unsafe { MmapOptions::new().map(&in_file)? };

    let problem = Problem::from_bytes(in_file_mmap.as_ref())?;
    drop(in_file_mmap);
    info!(
        "Loaded problem: {} edges, {} queries",
        problem.edge_count(),
        problem.queries.len()
    );

    let graph = problem.build_graph()?;
    if cli.dump_graph {
        info!("{}", report::matrix_dump(&graph));
    }

    let policy = if cli.skip_missing {
        MissingPortPolicy::Skip
    } else {
        MissingPortPolicy::Abort
    };

    let results = if cli.parallel {
        query::par_evaluate(&graph, &problem.queries, policy)?
    } else {
        query::evaluate(&graph, &problem.queries, policy)?
    };

    let mut writer: Box<dyn Write> = match cli.out_file {
        Some(out_file) => {
            info!("Writing report to {:?}", out_file);
            Box::new(BufWriter::new(File::create(out_file)?))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    report::write_report(&mut writer, &results, cli.format)
}
