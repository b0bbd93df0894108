use std::fs;
use std::io::{self, Read, Write};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::{Level, debug, info};

use crate::ast::Expression;
use crate::textify::foundation::Rendered;
use crate::{Grammar, OutputOptions};

#[derive(Parser)]
#[command(name = "hypertalk-parse")]
#[command(about = "A CLI for parsing and formatting HyperTalk expressions")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let (input, output) = match &self.command {
            Commands::Parse { input, output, .. } | Commands::Validate { input, output, .. } => {
                (input, output)
            }
        };
        init_tracing(self.verbose());
        let reader =
            get_reader(input).with_context(|| format!("Failed to open input file: {input}"))?;
        let writer =
            get_writer(output).with_context(|| format!("Failed to create output file: {output}"))?;
        self.run_with_io(reader, writer)
    }

    /// Run CLI with provided readers and writers for testing
    pub fn run_with_io<R: Read, W: Write>(&self, reader: R, writer: W) -> Result<()> {
        match &self.command {
            Commands::Parse { to, abbreviate, .. } => {
                let options = if *abbreviate {
                    OutputOptions::abbreviated()
                } else {
                    OutputOptions::default()
                };
                self.run_parse_with_io(reader, writer, to, &options)
            }
            Commands::Validate { .. } => self.run_validate_with_io(reader, writer),
        }
    }

    fn verbose(&self) -> bool {
        match &self.command {
            Commands::Parse { verbose, .. } | Commands::Validate { verbose, .. } => *verbose,
        }
    }

    fn run_parse_with_io<R: Read, W: Write>(
        &self,
        reader: R,
        writer: W,
        to: &Format,
        options: &OutputOptions,
    ) -> Result<()> {
        let input_text = read_text_input(reader)?;
        let grammar = Grammar::new();

        let mut expressions = Vec::new();
        for (line, text) in logical_lines(&input_text) {
            let expression = grammar
                .try_parse(&text)
                .with_context(|| format!("Failed to parse line {line}: {text}"))?;
            expressions.push(expression);
        }
        info!(count = expressions.len(), "parsed expressions");

        to.write_expressions(writer, &expressions, options)
            .with_context(|| {
                format!(
                    "Failed to write output as {} format",
                    format!("{to:?}").to_lowercase()
                )
            })
    }

    fn run_validate_with_io<R: Read, W: Write>(&self, reader: R, mut writer: W) -> Result<()> {
        let input_text = read_text_input(reader)?;
        let grammar = Grammar::new();
        let options = OutputOptions::default();

        let mut total = 0;
        let mut failures = 0;
        for (line, text) in logical_lines(&input_text) {
            total += 1;
            match grammar.try_parse(&text) {
                Ok(expression) => {
                    writeln!(writer, "ok: {}", Rendered::new(&expression, &options))?;
                }
                Err(error) => {
                    failures += 1;
                    debug!(line, %error, "invalid expression");
                    writeln!(writer, "error: line {line}: {error}")?;
                }
            }
        }

        if failures > 0 {
            bail!("{failures} of {total} expressions failed to parse");
        }
        info!(total, "all expressions are valid");
        Ok(())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse one expression per line and write the result
    ///
    /// Output formats:
    ///   text  - Canonical HyperTalk text
    ///   debug - The expression tree as Rust debug output
    ///   json  - The expression tree as JSON
    ///   yaml  - The expression tree as YAML
    Parse {
        /// Input file (use - for stdin)
        #[arg(short, long, default_value = "-")]
        input: String,
        /// Output file (use - for stdout)
        #[arg(short, long, default_value = "-")]
        output: String,
        /// Output format: text, debug, json, yaml
        #[arg(short = 't', long, default_value = "text")]
        to: Format,
        /// Write text output with abbreviated keywords
        #[arg(long)]
        abbreviate: bool,
        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
    /// Check that every line parses as an expression
    Validate {
        /// Input file (use - for stdin)
        #[arg(short, long, default_value = "-")]
        input: String,
        /// Output file (use - for stdout)
        #[arg(short, long, default_value = "-")]
        output: String,
        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

#[derive(Clone, Debug)]
pub enum Format {
    Text,
    Debug,
    Json,
    Yaml,
}

impl std::str::FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Format::Text),
            "debug" => Ok(Format::Debug),
            "json" => Ok(Format::Json),
            "yaml" => Ok(Format::Yaml),
            _ => Err(format!(
                "Invalid format: '{s}'. Supported formats: text, debug, json, yaml"
            )),
        }
    }
}

impl Format {
    pub fn write_expressions<W: Write>(
        &self,
        mut writer: W,
        expressions: &[Expression],
        options: &OutputOptions,
    ) -> Result<()> {
        match self {
            Format::Text => {
                for expression in expressions {
                    writeln!(writer, "{}", Rendered::new(expression, options))?;
                }
            }
            Format::Debug => {
                for expression in expressions {
                    writeln!(writer, "{expression:#?}")?;
                }
            }
            Format::Json => {
                let json = serde_json::to_string_pretty(expressions)?;
                write_text_output(writer, &json)?;
            }
            Format::Yaml => {
                // Nested enums only serialize as single-key maps.
                let mut yaml = Vec::new();
                {
                    let mut serializer = serde_yaml::Serializer::new(&mut yaml);
                    serde_yaml::with::singleton_map_recursive::serialize(
                        &expressions,
                        &mut serializer,
                    )?;
                }
                write_text_output(writer, &String::from_utf8(yaml)?)?;
            }
        }
        Ok(())
    }
}

/// Non-blank logical lines with their 1-based starting line number. A line
/// ending in `¬` continues on the next one.
fn logical_lines(text: &str) -> Vec<(usize, String)> {
    let mut lines = Vec::new();
    let mut pending: Option<(usize, String)> = None;
    for (index, line) in text.lines().enumerate() {
        let (start, mut joined) = pending.take().unwrap_or_else(|| (index + 1, String::new()));
        joined.push_str(line);
        if line.ends_with('¬') {
            joined.push('\n');
            pending = Some((start, joined));
        } else if !joined.trim().is_empty() {
            lines.push((start, joined));
        }
    }
    if let Some((start, joined)) = pending {
        lines.push((start, joined));
    }
    lines
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    // Fails only when a subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .try_init();
}

/// Read text input from reader
fn read_text_input<R: Read>(mut reader: R) -> Result<String> {
    let mut buffer = String::new();
    reader.read_to_string(&mut buffer)?;
    Ok(buffer)
}

/// Write text output to writer
fn write_text_output<W: Write>(mut writer: W, content: &str) -> Result<()> {
    writer.write_all(content.as_bytes())?;
    Ok(())
}

/// Helper function to get reader from file path (or stdin if "-")
fn get_reader(path: &str) -> Result<Box<dyn Read>> {
    if path == "-" {
        Ok(Box::new(io::stdin()))
    } else {
        Ok(Box::new(fs::File::open(path)?))
    }
}

/// Helper function to get writer from file path (or stdout if "-")
fn get_writer(path: &str) -> Result<Box<dyn Write>> {
    if path == "-" {
        Ok(Box::new(io::stdout()))
    } else {
        Ok(Box::new(fs::File::create(path)?))
    }
}
