use anyhow::{Context, Result};
use clap::{Parser as _, Subcommand};
use nameparser::{HumanName, Parser, Prefer};
use std::io::{self, BufRead, Write};
use std::process;
use tracing::{debug, Level};

#[derive(clap::Parser, Debug)]
#[command(name = "nameparser")]
#[command(about = "Split human names into title, first, middle, last, suffix and nickname")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Split names joined by "and" or "&" into several names
    #[arg(long, global = true)]
    multiple: bool,

    /// Capitalize parsed components
    #[arg(long, global = true)]
    normalize: bool,

    /// After a title, read a prefixed last name ("Mr. Del Richards") as a first name
    #[arg(long, global = true)]
    first_over_prefix: bool,

    /// Leave empty components out of the JSON output
    #[arg(long, global = true)]
    skip_empty: bool,

    /// Log to stderr (repeat for more detail)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a name given as arguments, or one name per line from stdin with `-`
    Parse {
        #[arg(required = true)]
        name: Vec<String>,
    },
    /// Exit with status 0 if two names are equal, 1 if not. With `-` as the
    /// first name, print each line of stdin equal to the second name.
    Eq { a: String, b: String },
}

struct Cli {
    parser: Parser,
    normalize: bool,
    skip_empty: bool,
}

impl Cli {
    fn parse(&self, input: &str) -> HumanName {
        let mut name = self.parser.parse(input);
        if self.normalize {
            self.parser.normalize(&mut name);
        }
        name
    }

    fn to_json(&self, name: &HumanName) -> Result<String> {
        let json = if self.skip_empty {
            serde_json::to_string(&name.as_map(false))?
        } else {
            serde_json::to_string(name)?
        };
        Ok(json)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    debug!(?args, "parsed CLI arguments");

    let mut prefer = Prefer::empty();
    prefer.set(Prefer::FIRST_OVER_PREFIX, args.first_over_prefix);

    let cli = Cli {
        parser: Parser::new()
            .multiple_names(args.multiple)
            .prefer(prefer),
        normalize: args.normalize,
        skip_empty: args.skip_empty,
    };

    match &args.command {
        Command::Parse { name } => parse_mode(&cli, name),
        Command::Eq { a, b } => equality_mode(&cli, a, b),
    }
}

fn parse_mode(cli: &Cli, args: &[String]) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.len() == 1 && args[0] == "-" {
        for line in io::stdin().lock().lines() {
            let line = line.context("reading stdin")?;
            let name = cli.parse(&line);
            if writeln!(out, "{}", cli.to_json(&name)?).is_err() {
                break;
            }
        }
        Ok(())
    } else {
        let name = cli.parse(&args.join(" "));
        writeln!(out, "{}", cli.to_json(&name)?)?;
        if name.is_unparsable() {
            process::exit(1);
        }
        Ok(())
    }
}

fn equality_mode(cli: &Cli, a: &str, b: &str) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if a == "-" {
        let target = cli.parse(b);
        for line in io::stdin().lock().lines() {
            let line = line.context("reading stdin")?;
            if cli.parse(&line) == target && writeln!(out, "{}", line.trim()).is_err() {
                break;
            }
        }
        Ok(())
    } else if cli.parse(a) == cli.parse(b) {
        writeln!(out, "equal")?;
        Ok(())
    } else {
        writeln!(out, "not equal!")?;
        process::exit(1);
    }
}
