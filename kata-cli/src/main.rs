//! Kata CLI
//!
//! Runs each exercise operation from the command line.

mod selector_parts;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use kata::json::{decode_value, encode, encode_pretty};
use kata::{Record, Rectangle, create_rectangle, decode_from_text};
use owo_colors::OwoColorize;

#[derive(Parser)]
#[command(name = "kata", version, about = "Shapes, JSON, and CSS selector exercises")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build a rectangle and print it with its area
    Area {
        /// Horizontal side
        width: f64,
        /// Vertical side
        height: f64,
    },
    /// Parse JSON and encode it again
    Encode {
        /// JSON text
        json: String,
        /// Indent the output
        #[arg(long)]
        pretty: bool,
    },
    /// Lay JSON fields over a blank value of the given kind
    Decode {
        /// Kind of the template value
        #[arg(long, value_enum, default_value_t = Kind::Record)]
        kind: Kind,
        /// JSON text
        json: String,
    },
    /// Build a selector from parts such as `element:div`, `id:main`, `combine:+`
    Selector {
        /// Parts in order
        #[arg(required = true)]
        parts: Vec<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Kind {
    Rectangle,
    Record,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Area { width, height } => {
            let rect = create_rectangle(width, height);
            print_rectangle(&rect)?;
        }
        Command::Encode { json, pretty } => {
            let value = decode_value(&json).context("reading input")?;
            let text = if pretty {
                encode_pretty(&value)?
            } else {
                encode(&value)?
            };
            println!("{text}");
        }
        Command::Decode { kind, json } => match kind {
            Kind::Rectangle => {
                let rect = decode_from_text(&Rectangle::<f64>::default(), &json)?;
                print_rectangle(&rect)?;
            }
            Kind::Record => {
                let record = decode_from_text(&Record::new(), &json)?;
                println!("{} {}", "record:".bold(), encode(&record)?);
            }
        },
        Command::Selector { parts } => match selector_parts::build(&parts) {
            Ok(builder) => println!("{}", builder.stringify()),
            Err(err) => {
                eprintln!("{} {err}", "error:".red().bold());
                std::process::exit(1);
            }
        },
    }

    Ok(())
}

fn print_rectangle(rect: &Rectangle) -> Result<()> {
    println!("{} {}", "rectangle:".bold(), encode(rect)?);
    println!("{} {}", "area:".bold(), rect.area());
    Ok(())
}
