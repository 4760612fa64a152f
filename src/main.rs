//! Command-line interface for curveml
//!
//! Exactly one mode per invocation:
//!   curveml -r <FILE>   - compile a MathML file into the coordinate module
//!   curveml -c          - reset the coordinate module to constant zero
//!   curveml -d          - draw the currently compiled curve

use clap::{ArgGroup, Parser};
use curveml::codegen;
use curveml::config::{ConfigError, CurvemlConfig, Loader};
use curveml::pipeline;
use curveml::viewer;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "curveml", version)]
#[command(about = "Compile MathML parametric curve definitions and draw the result")]
#[command(group(ArgGroup::new("mode").required(true).args(["read", "clear", "draw"])))]
struct Args {
    /// Compile a MathML file into the coordinate module
    #[arg(short = 'r', long = "read", value_name = "FILE")]
    read: Option<PathBuf>,

    /// Reset the coordinate module to the constant-zero baseline
    #[arg(short = 'c', long = "clear")]
    clear: bool,

    /// Draw the currently compiled curve in the terminal
    #[arg(short = 'd', long = "draw")]
    draw: bool,

    /// Layer a configuration file over the built-in defaults
    #[arg(long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the generated module path
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,

    /// Print the assembled term records as JSON before writing (read mode)
    #[arg(long = "dump-terms")]
    dump_terms: bool,
}

fn main() {
    let args = Args::parse();

    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        process::exit(1);
    });

    let result = if let Some(path) = &args.read {
        run_read(path, &config, args.dump_terms)
    } else if args.clear {
        run_clear(&config)
    } else {
        run_draw(&config)
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn load_config(args: &Args) -> Result<CurvemlConfig, ConfigError> {
    let mut loader = Loader::new();
    if let Some(path) = &args.config {
        loader = loader.with_file(path);
    }
    if let Some(output) = &args.output {
        loader = loader.set_override("output.path", output.display().to_string())?;
    }
    loader.build()
}

/// Compile `path` and write the generated module.
///
/// An unopenable input is reported but not fatal: compilation proceeds with
/// an empty source and deterministically produces the degenerate empty
/// records. Parse failures abort before anything is written.
fn run_read(path: &Path, config: &CurvemlConfig, dump_terms: bool) -> Result<(), Box<dyn Error>> {
    let source = fs::read_to_string(path).unwrap_or_else(|_| {
        eprintln!("Unable to open file {}", path.display());
        String::new()
    });

    let records = pipeline::compile_source(&source)?;

    if dump_terms {
        println!("{}", serde_json::to_string_pretty(&records)?);
    }

    let module = codegen::render_module(&records);
    codegen::write_module(Path::new(&config.output.path), &module)?;
    Ok(())
}

fn run_clear(config: &CurvemlConfig) -> Result<(), Box<dyn Error>> {
    codegen::write_module(Path::new(&config.output.path), &codegen::reset_module())?;
    Ok(())
}

fn run_draw(config: &CurvemlConfig) -> Result<(), Box<dyn Error>> {
    viewer::run(&config.graph)?;
    Ok(())
}
