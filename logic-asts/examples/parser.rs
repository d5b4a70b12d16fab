use std::io::Write;

use clap::Parser;
use logic_asts::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};
use termcolor::{ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Parse a formula of one of the nested logics and print its normal forms
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Formula to parse
    pub formula: Option<String>,

    /// File holding the formula (ignored when a formula is given)
    #[arg(short, long)]
    pub file: Option<String>,

    /// Grammar layer: base, ltl, strel or stl_go (or their long names)
    #[arg(short, long, default_value = "ltl")]
    pub layer: String,

    /// Log parsing steps to stderr
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

fn main() {
    let args = Args::parse();

    if args.verbose {
        let _ = WriteLogger::init(LevelFilter::Trace, Config::default(), std::io::stderr());
    }

    let src = if let Some(formula) = args.formula {
        formula
    } else if let Some(file) = args.file {
        std::fs::read_to_string(file).expect("Failed to read file")
    } else {
        eprintln!("No input provided. Pass a formula or use --file <FILE>.");
        std::process::exit(1);
    };

    let mut error_color = ColorSpec::new();
    error_color.set_fg(Some(termcolor::Color::Red));
    error_color.set_intense(true);

    let mut ok_color = ColorSpec::new();
    ok_color.set_fg(Some(termcolor::Color::Green));
    ok_color.set_intense(true);

    let stdout = StandardStream::stdout(ColorChoice::Auto);
    let mut stdout = stdout.lock();

    match parse(src.trim(), &args.layer) {
        Ok(expr) => {
            stdout.set_color(&ok_color).unwrap();
            writeln!(stdout, "Formula parsed successfully:").unwrap();
            stdout.reset().unwrap();

            writeln!(stdout, "  formula  {expr}").unwrap();
            writeln!(stdout, "  expanded {}", expr.expand()).unwrap();
            writeln!(stdout, "  nnf      {}", expr.to_nnf()).unwrap();
            writeln!(stdout, "  horizon  {}", expr.horizon()).unwrap();
            match expr.layer() {
                Some(layer) => writeln!(stdout, "  layer    {layer}").unwrap(),
                None => writeln!(stdout, "  layer    (mixed)").unwrap(),
            }
        }
        Err(ParseError::Syntax(err)) => {
            stdout.set_color(&error_color).unwrap();
            writeln!(stdout, "Syntax error:").unwrap();
            stdout.reset().unwrap();
            write!(stdout, "{}", err.report(src.trim())).unwrap();
            std::process::exit(1);
        }
        Err(err) => {
            stdout.set_color(&error_color).unwrap();
            writeln!(stdout, "Formula rejected: {err}").unwrap();
            stdout.reset().unwrap();
            std::process::exit(1);
        }
    }
    stdout.flush().unwrap();
}
