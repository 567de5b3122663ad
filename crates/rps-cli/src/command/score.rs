use rps_engine::ScoreStore as _;

use crate::command::StoreArg;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct ScoreArg {
    #[clap(flatten)]
    store: StoreArg,
}

pub(crate) fn run(arg: &ScoreArg) -> anyhow::Result<()> {
    let store = arg.store.open()?;
    let score = store.load();
    tracing::info!(score, path = %store.path().display(), "score read");
    println!("{score}");
    Ok(())
}
