// cparse: C tokenizer and structural parser with report output and a terminal viewer

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::Level;

use cparse::ui::App;
use cparse::{analyze, init_subscriber};

/// Which reports `--print` writes to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PrintMode {
    Tokens,
    Tree,
    All,
}

#[derive(Parser)]
#[command(name = "cparse")]
#[command(about = "Tokenize and parse C source, then show the token and parse tree reports")]
struct Args {
    /// C source file to analyze; `-` reads standard input
    #[arg(default_value = "-")]
    input: PathBuf,

    /// Print reports to stdout instead of opening the viewer
    #[arg(long, value_enum)]
    print: Option<PrintMode>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn read_source(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .context("failed to read source from stdin")?;
        return Ok(source);
    }

    fs::read_to_string(input).with_context(|| format!("failed to read '{}'", input.display()))
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_subscriber(log_level(args.verbose)).context("failed to install log subscriber")?;

    let source = read_source(&args.input)?;
    let analysis = analyze(&source);

    if let Some(mode) = args.print {
        if matches!(mode, PrintMode::Tokens | PrintMode::All) {
            print!("{}", analysis.token_report());
        }
        if mode == PrintMode::All {
            println!();
        }
        if matches!(mode, PrintMode::Tree | PrintMode::All) {
            print!("{}", analysis.tree_report());
        }
        return Ok(());
    }

    // Set up terminal
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(analysis, source);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.context("viewer failed")
}
