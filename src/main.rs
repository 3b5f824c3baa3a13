use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use linear_solver::elimination::render::{render_lines, render_solution_lines};
use linear_solver::input::{parse_augmented, parse_equation_count};
use linear_solver::solve;

/// Solve a square linear system by Gauss-Jordan elimination and print every
/// row operation.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of equations
    #[arg(short = 'n', long, allow_hyphen_values = true)]
    pub equations: String,

    /// Augmented matrix, one equation per line. Reads stdin when absent or `-`
    pub input: Option<PathBuf>,

    /// Fail when a pivot is zero instead of printing the degraded solution
    #[arg(long)]
    pub strict: bool,

    /// Print only the solution block
    #[arg(long)]
    pub solution_only: bool,
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
        }
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("reading stdin")?;
            Ok(text)
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let n = parse_equation_count(&args.equations)?;
    let text = read_input(args.input.as_deref())?;
    let matrix = parse_augmented(&text, n).context("parsing augmented matrix")?;

    let result = solve(matrix, n)?;
    if args.strict {
        result.solution()?;
    }

    let lines = if args.solution_only {
        render_solution_lines(&result)
    } else {
        render_lines(&result)
    };
    for line in lines {
        println!("{line}");
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    log::debug!("Running with: {args:?}");
    if let Err(err) = run(&args) {
        eprintln!("failed to solve system: {err:?}");
        process::exit(1)
    }
}
