use std::path::PathBuf;

use clap::Parser;

/// Terminal 2048: slide with the arrow keys, quit with q.
#[derive(Debug, Parser)]
#[command(name = "slide-game", version, about)]
pub struct Cli {
    /// Seed for the tile-spawn RNG, for a reproducible game.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write logs to this file. Filter with RUST_LOG (default: info).
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_no_seed_and_no_log() {
        let cli = Cli::try_parse_from(["slide-game"]).expect("parse");
        assert_eq!(cli.seed, None);
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn parses_seed_and_log_file() {
        let cli = Cli::try_parse_from(["slide-game", "--seed", "42", "--log-file", "game.log"])
            .expect("parse");
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.log_file, Some(PathBuf::from("game.log")));
    }

    #[test]
    fn rejects_non_numeric_seed() {
        assert!(Cli::try_parse_from(["slide-game", "--seed", "abc"]).is_err());
    }
}
