use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::{logging, store::FileScoreStore};

use self::{play::PlayArg, score::ScoreArg};

mod play;
mod score;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Write logs to this file instead of the data directory
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play Rock-Paper-Scissors against the house
    Play(#[clap(flatten)] PlayArg),
    /// Print the saved score
    Score(#[clap(flatten)] ScoreArg),
}

/// Location of the score store, shared by the subcommands.
#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct StoreArg {
    /// Path of the score store file [default: <data dir>/rps/store.json]
    #[arg(long = "store", value_name = "PATH")]
    path: Option<PathBuf>,
}

impl StoreArg {
    pub(crate) fn open(&self) -> anyhow::Result<FileScoreStore> {
        match &self.path {
            Some(path) => Ok(FileScoreStore::new(path)),
            None => FileScoreStore::open_default(),
        }
    }
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    logging::init(args.log_file.as_deref());

    match args.mode.unwrap_or(Mode::Play(PlayArg::default())) {
        Mode::Play(arg) => play::run(&arg)?,
        Mode::Score(arg) => score::run(&arg)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_defaults_to_no_mode() {
        let args = CommandArgs::try_parse_from(["rps"]).unwrap();
        assert!(args.mode.is_none());
        assert!(args.log_file.is_none());
    }

    #[test]
    fn test_parses_play_flags() {
        let args = CommandArgs::try_parse_from([
            "rps",
            "play",
            "--store",
            "/tmp/rps.json",
            "--no-save",
            "--seed",
            "000102030405060708090a0b0c0d0e0f",
        ])
        .unwrap();
        assert!(matches!(args.mode, Some(Mode::Play(_))));
    }

    #[test]
    fn test_store_arg_overrides_default_path() {
        let arg = StoreArg {
            path: Some(PathBuf::from("/tmp/rps.json")),
        };
        let store = arg.open().unwrap();
        assert_eq!(store.path(), std::path::Path::new("/tmp/rps.json"));
    }

    #[test]
    fn test_rejects_bad_seed() {
        let result = CommandArgs::try_parse_from(["rps", "play", "--seed", "xyz"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parses_score_with_global_log_file() {
        let args =
            CommandArgs::try_parse_from(["rps", "score", "--log-file", "/tmp/rps.log"]).unwrap();
        assert!(matches!(args.mode, Some(Mode::Score(_))));
        assert_eq!(args.log_file, Some(PathBuf::from("/tmp/rps.log")));
    }
}
