mod debug_report;

use clap::Parser;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use symbex::{Options, TriggerTable, default_table, expand_verbose_with, load_symbol_list_file, load_table_file};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "SYMBEX_LOG";

/// Replay text keystroke by keystroke through the symbol autocorrect engine.
///
/// Exit codes: 0 success, 1 internal error, 2 invalid arguments, input or
/// configuration.
#[derive(Parser, Debug)]
#[command(name = "symbex", version)]
struct Cli {
    /// Text to type. Reads stdin when omitted.
    input: Vec<String>,

    /// Trigger table feed: JSON array of {"key", "val", "f"} objects.
    #[arg(long, value_name = "JSON", conflicts_with = "symbols")]
    table: Option<PathBuf>,

    /// Symbol list: JSON array of [key, value] pairs; policies follow key shape.
    #[arg(long, value_name = "JSON")]
    symbols: Option<PathBuf>,

    /// Replay as a single-line box instead of a rich-text field.
    #[arg(long)]
    line_edit: bool,

    /// Print the active trigger table and exit.
    #[arg(long)]
    list: bool,

    /// Print every replacement and match counters.
    #[arg(short, long)]
    verbose: bool,

    /// Force ANSI color output.
    #[arg(long, conflicts_with = "no_color")]
    color: bool,

    /// Disable ANSI color output.
    #[arg(long)]
    no_color: bool,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    let color = if cli.color {
        true
    } else if cli.no_color {
        false
    } else {
        io::stdout().is_terminal()
    };

    let table = match load_table(&cli) {
        Ok(table) => table,
        Err(err) => {
            report_error(&err);
            return ExitCode::from(2);
        }
    };

    if cli.list {
        let custom = cli.table.is_some() || cli.symbols.is_some();
        debug_report::print_table(&table, !custom, color);
        return ExitCode::SUCCESS;
    }

    let input = match read_input(cli.input) {
        Ok(input) if !input.trim().is_empty() => input,
        Ok(_) => {
            eprintln!("error: no input provided (pass text or pipe it on stdin)");
            return ExitCode::from(2);
        }
        Err(err) => {
            eprintln!("error: failed to read stdin: {err}");
            return ExitCode::from(1);
        }
    };

    let options = Options { line_edit: cli.line_edit, ..Options::default() };
    let res = expand_verbose_with(&input, &table, &options);
    if cli.verbose {
        debug_report::print_run(&input, &res, color);
    } else {
        println!("{}", res.text);
    }
    ExitCode::SUCCESS
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .try_init();
}

fn load_table(cli: &Cli) -> symbex::Result<TriggerTable> {
    if let Some(path) = &cli.table {
        return load_table_file(path);
    }
    if let Some(path) = &cli.symbols {
        let list = load_symbol_list_file(path)?;
        list.validate()?;
        return list.to_table();
    }
    Ok(default_table())
}

fn read_input(args: Vec<String>) -> io::Result<String> {
    if !args.is_empty() {
        return Ok(args.join(" "));
    }
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

fn report_error(err: &symbex::Error) {
    eprintln!("error: {err}");
    if let symbex::Error::InvalidFormat { issues } = err {
        for issue in issues {
            eprintln!("  line {}: {:?}", issue.line, issue.content);
        }
    }
}
