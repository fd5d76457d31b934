use clap::error::ErrorKind;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use xlsxroster::{ReportBuilder, ReportKind, ReportSettings, RosterError, WorkbookReader};

#[derive(Parser)]
#[command(name = "xlsxroster")]
#[command(about = "Attendance tables and weekly lecture schedules from a roster workbook")]
#[command(long_about = "Attendance tables and weekly lecture schedules from a roster workbook.

Each roster sheet (default: Agile, Narzędzia) produces one output file in the
output directory. The schedule also reads the '<sheet>-daty' (dates) and
'<sheet>-tematy' (titles) sheets, joined by e-mail address.

EXAMPLES:
  xlsxroster html roster.xlsx                  # Agile.txt, Narzędzia.txt
  xlsxroster markdown roster.xlsx -s Agile     # Agile.txt (date columns only)
  xlsxroster schedule roster.xlsx -o out/      # out/Agile_weekly_schedule.txt ...

Logging goes to stderr and is controlled by RUST_LOG (default: xlsxroster=info).")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fixed 15-column HTML attendance table (<Sheet>.txt)
    Html(RunArgs),

    /// Markdown attendance table over the date columns of the header (<Sheet>.txt)
    Markdown(RunArgs),

    /// Weekly lecture schedule in Markdown (<Sheet>_weekly_schedule.txt)
    Schedule(RunArgs),
}

#[derive(Args)]
struct RunArgs {
    /// Path to the roster workbook (.xlsx, .xls, .ods)
    workbook: PathBuf,

    /// Roster sheet to process (repeatable; overrides the defaults)
    #[arg(short, long = "sheet", value_name = "NAME")]
    sheets: Vec<String>,

    /// Directory for the output files
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// JSON file with layout and schedule settings
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let _ = e.print();
            process::exit(1);
        }
    };

    init_tracing();

    if let Err(e) = run(cli) {
        handle_error(e);
        process::exit(1);
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "xlsxroster=info".into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), RosterError> {
    let (kind, args) = match cli.command {
        Commands::Html(args) => (ReportKind::HtmlTable, args),
        Commands::Markdown(args) => (ReportKind::MarkdownTable, args),
        Commands::Schedule(args) => (ReportKind::WeeklySchedule, args),
    };

    let mut builder = ReportBuilder::new();
    if let Some(path) = &args.config {
        builder = builder.with_settings(ReportSettings::from_json_file(path)?);
    }
    if !args.sheets.is_empty() {
        builder = builder.with_roster_sheets(args.sheets);
    }
    if let Some(dir) = args.output_dir {
        builder = builder.with_output_dir(dir);
    }
    let reporter = builder.build()?;

    let mut workbook = WorkbookReader::open_path(&args.workbook)?;
    reporter.run(kind, &mut workbook)?;

    Ok(())
}

fn handle_error(error: RosterError) {
    match error {
        RosterError::SheetNotFound(_) => {
            eprintln!("{}", error);
        }
        RosterError::Io(io_err) => {
            eprintln!("I/O Error: {}", io_err);
            eprintln!("Please check that the file exists and you have permission to access it.");
        }
        RosterError::Parse(parse_err) => {
            eprintln!("Parse Error: {}", parse_err);
            eprintln!("The file may not be a valid spreadsheet or may be corrupted.");
        }
        RosterError::Config(msg) => {
            eprintln!("Configuration Error: {}", msg);
        }
        RosterError::ConfigFile(json_err) => {
            eprintln!("Configuration File Error: {}", json_err);
        }
        RosterError::SecurityViolation(msg) => {
            eprintln!("Security Violation: {}", msg);
        }
    }
}
