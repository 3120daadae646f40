use anyhow::{Context, Result};
use clap::Parser;
use poker_hands::reader::{load_hands, ReadOptions, MIN_HAND_SIZE};
use poker_hands::token::TokenPolicy;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Print poker hands from a notation file, filling in `?N` future cards from
/// an unshuffled deck.
#[derive(Debug, Parser)]
#[command(name = "poker-hands", version)]
struct Args {
    /// Input file with one hand per line.
    #[arg(default_value = "test1.txt")]
    input: PathBuf,

    /// Fewest cards a hand may have before the whole read fails.
    #[arg(long, default_value_t = MIN_HAND_SIZE)]
    min_cards: usize,

    /// Reject tokens longer than three characters instead of truncating them.
    #[arg(long)]
    strict_tokens: bool,

    /// Log registrations and resolution as well as warnings.
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn options(&self) -> ReadOptions {
        ReadOptions {
            min_hand_size: self.min_cards,
            token_policy: if self.strict_tokens { TokenPolicy::Strict } else { TokenPolicy::Truncate },
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).with_target(false).init();
}

fn run(args: &Args) -> Result<()> {
    let file = File::open(&args.input)
        .with_context(|| format!("failed to open file '{}'", args.input.display()))?;
    let hands = load_hands(BufReader::new(file), &args.options())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for hand in &hands {
        writeln!(out, "{hand}")?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use poker_hands::reader::ReadError;
    use tempfile::NamedTempFile;

    fn args_for(path: &std::path::Path) -> Args {
        Args::parse_from(["poker-hands", path.to_str().unwrap()])
    }

    fn input_file(contents: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f
    }

    #[test]
    fn defaults_match_the_library() {
        let args = Args::parse_from(["poker-hands"]);
        assert_eq!(args.input, PathBuf::from("test1.txt"));
        assert_eq!(args.options(), ReadOptions::default());
    }

    #[test]
    fn flags_map_onto_read_options() {
        let args = Args::parse_from(["poker-hands", "hands.txt", "--min-cards", "7", "--strict-tokens"]);
        let opts = args.options();
        assert_eq!(opts.min_hand_size, 7);
        assert_eq!(opts.token_policy, TokenPolicy::Strict);
    }

    #[test]
    fn missing_input_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(&args_for(&dir.path().join("absent.txt"))).unwrap_err();
        assert!(err.to_string().contains("failed to open file"));
    }

    #[test]
    fn short_hand_fails_the_run() {
        let file = input_file("Ah Kh Qh Jh 0h\nAh Kh\n");
        let err = run(&args_for(file.path())).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ReadError>(),
            Some(ReadError::NotEnoughCards { line: 2, found: 2, .. })
        ));
    }

    #[test]
    fn well_formed_input_succeeds() {
        let file = input_file("?0 ?1 Ah Kh Qh\n\n2c 3c 4c 5c 6c\n");
        run(&args_for(file.path())).unwrap();
    }
}
