// Command-line entry point for Taintrace.

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use taintrace::application::{MatchUsecase, TraceUsecase};
use taintrace::infrastructure::concurrency;
use taintrace::ports::report_exporter::{JsonExporter, TableExporter};
use taintrace::ports::ReportExporter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Worker threads for propagation (defaults to the core count)
    #[arg(long)]
    threads: Option<usize>,

    /// Demangle symbol names in the graph file before parsing
    #[arg(long)]
    demangle: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Propagate taint from seed functions and report badness per function
    Trace {
        /// Call-graph description file
        graph_file: PathBuf,

        /// Seed list: one function label per line, '#' lines ignored
        taint_file: PathBuf,

        /// Only report functions under this crate/namespace prefix
        filter_prefix: String,

        /// Report format
        #[arg(short, long, value_enum, default_value = "table")]
        format: Format,
    },
    /// Cross-reference external labels against the graph by normalized form
    Match {
        /// Call-graph description file
        graph_file: PathBuf,

        /// Externally produced label list, one per line
        labels_file: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    Table,
    Json,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    concurrency::init_thread_pool(cli.threads)?;

    let mut out = io::stdout().lock();

    match cli.command {
        Command::Trace {
            graph_file,
            taint_file,
            filter_prefix,
            format,
        } => {
            let exporter: &dyn ReportExporter = match format {
                Format::Table => &TableExporter,
                Format::Json => &JsonExporter,
            };
            let usecase = TraceUsecase { exporter };
            usecase.run(&graph_file, &taint_file, &filter_prefix, cli.demangle, &mut out)
        }
        Command::Match {
            graph_file,
            labels_file,
        } => MatchUsecase.run(&graph_file, &labels_file, cli.demangle, &mut out),
    }
}
