//! Gridcalc CLI - interactive grid calculator

use anyhow::{Context, Result};
use clap::Parser;
use gridcalc::prelude::*;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gridcalc")]
#[command(author, version, about = "Interactive grid calculator")]
struct Cli {
    /// Number of rows (1-99)
    #[arg(long, default_value_t = 10)]
    rows: u32,

    /// Number of columns (1-26)
    #[arg(long, default_value_t = 10)]
    cols: u16,

    /// CSV file to load at startup
    #[arg(short, long)]
    load: Option<PathBuf>,

    /// Field delimiter for CSV files
    #[arg(short, long, default_value_t = ',')]
    delimiter: char,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let delimiter =
        u8::try_from(cli.delimiter).context("Delimiter must be a single ASCII character")?;

    let mut engine = Engine::new(cli.rows, cli.cols)
        .with_context(|| format!("Failed to create a {}x{} grid", cli.rows, cli.cols))?;

    if let Some(path) = &cli.load {
        let options = CsvReadOptions {
            delimiter,
            ..Default::default()
        };
        CsvReader::read_file(path, &mut engine, &options)
            .with_context(|| format!("Failed to load '{}'", path.display()))?;
    }

    repl(&mut engine, delimiter)
}

fn repl(engine: &mut Engine, delimiter: u8) -> Result<()> {
    let mut stdout = io::stdout();
    let stdin = io::stdin().lock();

    println!("gridcalc - type 'help' for commands");
    prompt(&mut stdout)?;

    for line in stdin.lines() {
        let line = line.context("Failed to read from stdin")?;
        let line = line.trim();
        if line.is_empty() {
            prompt(&mut stdout)?;
            continue;
        }

        match dispatch(engine, line, delimiter) {
            Ok(true) => break,
            Ok(false) => {}
            Err(err) => eprintln!("error: {:#}", err),
        }

        prompt(&mut stdout)?;
    }

    Ok(())
}

fn prompt(stdout: &mut io::Stdout) -> Result<()> {
    print!("> ");
    stdout.flush().context("Failed to flush stdout")?;
    Ok(())
}

/// Run one command; returns `true` when the loop should end
fn dispatch(engine: &mut Engine, line: &str, delimiter: u8) -> Result<bool> {
    let mut parts = line.split_whitespace();
    let command = parts.next().unwrap_or_default();

    match command {
        "put" => {
            let addr = parts.next().context("usage: put <address> <text>")?;
            let text = parts.collect::<Vec<_>>().join(" ");
            engine.put(addr, &text)?;
        }
        "get" => {
            let addr = parts.next().context("usage: get <address>")?;
            println!("{}", engine.get(addr)?);
        }
        "show" => {
            println!("{}", engine.sheet());
        }
        "save" => {
            let path = parts.next().context("usage: save <path>")?;
            let options = CsvWriteOptions { delimiter };
            CsvWriter::write_file(engine, path, &options)
                .with_context(|| format!("Failed to save '{}'", path))?;
        }
        "load" => {
            let path = parts.next().context("usage: load <path>")?;
            let options = CsvReadOptions {
                delimiter,
                ..Default::default()
            };
            CsvReader::read_file(path, engine, &options)
                .with_context(|| format!("Failed to load '{}'", path))?;
        }
        "help" => print_help(),
        "quit" | "exit" => return Ok(true),
        other => eprintln!("unknown command: '{}' (try 'help')", other),
    }

    Ok(false)
}

fn print_help() {
    println!("Commands:");
    println!("  put <address> <text>   set a cell (text starting with '=' is a formula)");
    println!("  get <address>          print a cell's value");
    println!("  show                   print the whole grid");
    println!("  save <path>            export the grid to a CSV file");
    println!("  load <path>            import a CSV file into the grid");
    println!("  help                   this message");
    println!("  quit                   leave");
}
