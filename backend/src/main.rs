use std::fmt;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, MietteHandlerOpts, Result, WrapErr};
use serde::Serialize;
use tracing::{debug, info};

use textpos::{IntoOffset, Offset, Options, ResolveError, SourceLoc, utils::logging};

#[derive(Parser)]
#[command(
    name = "textpos",
    version,
    about = "Resolve text offsets into line/column positions"
)]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    #[command(visible_aliases = &["r"])]
    Resolve {
        /// File to read, or `-` for stdin
        input: PathBuf,
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        indices: Vec<IndexArg>,
        /// Report lines and columns starting at 1
        #[arg(long)]
        one_based: bool,
        /// Print a JSON array instead of path:line:column lines
        #[arg(long)]
        json: bool,
    },
}

/// An offset as typed on the command line. Fractional input is kept so the
/// resolver can reject it.
#[derive(Clone, Copy, Debug)]
enum IndexArg {
    Int(i128),
    Float(f64),
}

impl FromStr for IndexArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if let Ok(n) = s.parse::<i128>() {
            return Ok(Self::Int(n));
        }
        s.parse::<f64>()
            .map(Self::Float)
            .map_err(|_| format!("`{s}` is not a number"))
    }
}

impl fmt::Display for IndexArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexArg::Int(n) => write!(f, "{n}"),
            IndexArg::Float(x) => write!(f, "{x}"),
        }
    }
}

impl IntoOffset for IndexArg {
    fn into_offset(self) -> std::result::Result<Offset, ResolveError> {
        match self {
            IndexArg::Int(n) => n.into_offset(),
            IndexArg::Float(x) => x.into_offset(),
        }
    }
}

#[derive(Serialize)]
struct Resolved {
    index: usize,
    line: usize,
    column: usize,
}

fn read_input(input: &Path, mut stdin: impl Read) -> Result<(String, String)> {
    if input == Path::new("-") {
        let mut src = String::new();
        stdin
            .read_to_string(&mut src)
            .into_diagnostic()
            .wrap_err("failed to read stdin")?;
        return Ok(("<stdin>".to_owned(), src));
    }

    let src = std::fs::read_to_string(input)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read {}", input.display()))?;
    Ok((input.display().to_string(), src))
}

/// One `path:line:column` line per location, or a single JSON array.
fn render(locs: &[SourceLoc<'_>], json: bool) -> Result<String> {
    if json {
        let out = locs
            .iter()
            .map(|loc| Resolved {
                index: loc.index,
                line: loc.position.line,
                column: loc.position.column,
            })
            .collect::<Vec<_>>();
        let mut rendered = serde_json::to_string(&out).into_diagnostic()?;
        rendered.push('\n');
        return Ok(rendered);
    }

    Ok(locs.iter().map(|loc| format!("{loc}\n")).collect())
}

/// Nothing is written unless every offset resolves.
fn run(cmd: Cmd, stdin: impl Read, out: &mut impl Write) -> Result<()> {
    match cmd {
        Cmd::Resolve {
            input,
            indices,
            one_based,
            json,
        } => {
            let (name, src) = read_input(&input, stdin)?;
            debug!(input = %name, len = src.len(), "read input");

            let options = Options { one_based };
            let mut resolved = Vec::with_capacity(indices.len());
            for arg in indices {
                let loc = SourceLoc::resolve(&name, &src, arg, options)
                    .wrap_err_with(|| format!("cannot resolve offset {arg} in {name}"))?;
                info!(%arg, %loc, "resolved");
                resolved.push(loc);
            }

            out.write_all(render(&resolved, json)?.as_bytes())
                .into_diagnostic()?;
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    miette::set_hook(Box::new(|_| {
        Box::new(
            MietteHandlerOpts::new()
                .color(true)
                .context_lines(3)
                .build(),
        )
    }))?;

    let _log_guard = logging::init(cli.verbose);

    run(cli.cmd, std::io::stdin(), &mut std::io::stdout().lock())
}
