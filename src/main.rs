use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use time::macros::format_description;
use tracing::{error, Level};
use tracing_appender::non_blocking;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::LocalTime;

use sha1::{read_input, selftest, Digest, Sha1};

const EXIT_MISMATCH: u8 = 1;
const EXIT_ERROR: u8 = 2;

#[derive(Parser, Debug)]
#[command(name="sha1", version, about="Compute SHA-1 digests of files, stdin or a string")]
struct Args {
    #[arg(short, long, conflicts_with="files", help="Hash this text instead of reading files")]
    string: Option<String>,

    #[arg(short, long, value_name="HEX", help="Compare every digest against this value")]
    expect: Option<String>,

    #[arg(long, help="Run the built-in known-answer vectors and exit")]
    self_test: bool,

    #[arg(long, value_name="DIR", help="Write logs to DIR/sha1.log instead of stderr")]
    log_dir: Option<PathBuf>,

    #[arg(short, long, action=ArgAction::Count, help="Increase log verbosity")]
    verbose: u8,

    #[arg(help="Files to hash; `-` or none reads stdin")]
    files: Vec<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Text(String),
    Path(PathBuf),
}

impl Input {
    fn name(&self) -> String {
        match self {
            Input::Text(text) => format!("\"{text}\""),
            Input::Path(path) => path.display().to_string(),
        }
    }

    fn read(&self) -> std::io::Result<Vec<u8>> {
        match self {
            Input::Text(text) => Ok(text.as_bytes().to_vec()),
            Input::Path(path) => read_input(path),
        }
    }
}

fn init_logging(args: &Args) -> Option<WorkerGuard> {
    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let timer = LocalTime::new(
        format_description!("[month]/[day]/[year] [hour repr:24]:[minute]:[second].[subsecond digits:4]"));

    match &args.log_dir {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::never(dir, "sha1.log");
            let (non_blocking, guard) = non_blocking(file_appender);
            tracing_subscriber::fmt()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_timer(timer)
                .with_max_level(level)
                .init();
            Some(guard)
        },
        None => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_timer(timer)
                .with_max_level(level)
                .init();
            None
        },
    }
}

/// Inputs in command-line order; no files means stdin.
fn inputs(args: &Args) -> Vec<Input> {
    if let Some(text) = &args.string {
        return vec![Input::Text(text.clone())]
    }
    if args.files.is_empty() {
        return vec![Input::Path(PathBuf::from("-"))]
    }
    args.files.iter().cloned().map(Input::Path).collect()
}

/// Diagnostics go to `err`; they are also logged when logs go to a file,
/// since stderr logging would print them twice.
fn report<E: Write>(args: &Args, err: &mut E, message: &str) {
    if args.log_dir.is_some() {
        error!("{message}");
    }
    let _ = writeln!(err, "{message}");
}

fn self_test<W: Write, E: Write>(args: &Args, hasher: &mut Sha1, out: &mut W, err: &mut E) -> u8 {
    match selftest::run(hasher) {
        Ok(outcomes) => {
            for outcome in &outcomes {
                let _ = writeln!(out, "{outcome}");
            }
            if outcomes.iter().all(|o| o.passed()) { 0 } else { EXIT_MISMATCH }
        },
        Err(e) => {
            report(args, err, &format!("self test could not run: {e}"));
            EXIT_ERROR
        },
    }
}

/// Hashes each input in turn, printing as it goes. Unreadable inputs are
/// reported and skipped; they decide the exit code over any mismatch.
fn run<W: Write, E: Write>(args: &Args, hasher: &mut Sha1, out: &mut W, err: &mut E) -> u8 {
    if args.self_test {
        return self_test(args, hasher, out, err)
    }

    let expected: Option<Digest> = match args.expect.as_deref().map(str::parse::<Digest>) {
        Some(Ok(digest)) => Some(digest),
        Some(Err(e)) => {
            report(args, err, &format!("invalid expected digest: {e}"));
            return EXIT_ERROR
        },
        None => None,
    };

    let mut failed = false;
    let mut mismatched = false;
    for input in inputs(args) {
        let name = input.name();
        let digest = match input.read() {
            Ok(bytes) => hasher.digest(&bytes).map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };
        let digest = match digest {
            Ok(digest) => digest,
            Err(e) => {
                report(args, err, &format!("{name}: {e}"));
                failed = true;
                continue
            },
        };

        let _ = writeln!(out, "{digest}  {name}");
        if let Some(expected) = &expected {
            if &digest == expected {
                let _ = writeln!(out, "Digests match!");
            } else {
                let _ = writeln!(out, "Digests DON'T match! expected {expected}");
                mismatched = true;
            }
        }
    }

    if failed {
        EXIT_ERROR
    } else if mismatched {
        EXIT_MISMATCH
    } else {
        0
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    let _guard = init_logging(&args);
    let mut hasher = Sha1::new();
    let code = run(&args, &mut hasher, &mut std::io::stdout().lock(), &mut std::io::stderr().lock());
    ExitCode::from(code)
}
