use rps_engine::{GameSession, MemoryScoreStore, MoveGenerator, MoveSeed, ScoreStore};

use crate::{
    command::{StoreArg, play::app::PlayApp},
    tui::Tui,
};

mod app;
mod input;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    #[clap(flatten)]
    store: StoreArg,
    /// Play without saving the score (starts from the saved score)
    #[clap(long)]
    no_save: bool,
    /// Seed for the house's moves, as 32 hex digits
    #[clap(long, value_name = "HEX")]
    seed: Option<MoveSeed>,
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg {
        store,
        no_save,
        seed,
    } = arg;

    let file_store = store.open()?;
    tracing::info!(path = %file_store.path().display(), no_save, "opening score store");
    let store: Box<dyn ScoreStore> = if *no_save {
        Box::new(MemoryScoreStore::with_score(file_store.load()))
    } else {
        Box::new(file_store)
    };
    let source = match seed {
        Some(seed) => {
            tracing::info!(%seed, "using fixed house seed");
            MoveGenerator::with_seed(*seed)
        }
        None => MoveGenerator::new(),
    };

    let session = GameSession::with_source(store, source);
    tracing::info!(score = session.score(), "session started");

    let mut app = PlayApp::new(session);
    Tui::new().run(&mut app)?;

    tracing::info!(score = app.session().score(), "session ended");
    Ok(())
}
