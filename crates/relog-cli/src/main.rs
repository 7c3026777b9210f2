//! `relog` CLI — re-render logfmt logs through a formatting template.
//!
//! ## Usage
//!
//! ```sh
//! # Reformat a file with the default template
//! relog -i app.log
//!
//! # Pipe from stdin, custom template
//! kubectl logs my-pod | relog -t "{time:C19} {level:U1} {msg}"
//!
//! # Append unreferenced fields at column 8 instead of 24
//! relog -i app.log --indent 8
//!
//! # Drop unreferenced fields entirely
//! relog -i app.log --no-extras
//!
//! # Plain {name} substitution, no format specifiers
//! relog -i app.log --simple -t "{level}: {msg}"
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Read};

#[derive(Parser)]
#[command(
    name = "relog",
    version,
    about = "Re-render logfmt records through a formatting template"
)]
struct Cli {
    /// Input file (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,

    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,

    /// Render template with {name} / {name:spec} placeholders
    #[arg(short, long, default_value = relog_core::DEFAULT_TEMPLATE)]
    template: String,

    /// Column width for fields appended after the rendered line
    #[arg(long, default_value_t = 24)]
    indent: usize,

    /// Drop fields the template does not reference
    #[arg(long)]
    no_extras: bool,

    /// Plain {name} substitution: no format specifiers, no appended fields
    #[arg(long)]
    simple: bool,
}

fn main() -> Result<()> {
    // Invoked bare, with nothing piped in by flag: show usage instead of
    // hanging on stdin (clap prints help and exits).
    if std::env::args().len() == 1 {
        Cli::parse_from(["relog", "--help"]);
        unreachable!();
    }

    let cli = Cli::parse();

    let input = read_input(cli.input.as_deref())?;
    let records = relog_core::parse(&input)?;
    eprintln!(
        "Parsed {} record(s) in {} row(s)",
        records.len(),
        input.lines().count()
    );

    let extra_indent = if cli.no_extras { None } else { Some(cli.indent) };

    let mut out = String::new();
    for record in &records {
        let line = if cli.simple {
            record.render_simple(&cli.template)
        } else {
            record
                .render(&cli.template, extra_indent)
                .context("failed to render record")?
        };
        out.push_str(&line);
        out.push('\n');
    }

    write_output(cli.output.as_deref(), &out)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
