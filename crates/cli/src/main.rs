use std::io;

use anyhow::Context;
use stockroom_cli::{CliConfig, Session};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::from_env();
    stockroom_observability::init(&config.tracing);
    for warning in &config.warnings {
        tracing::warn!("{warning}");
    }

    tracing::info!("starting interactive session");

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout().lock());
    session.run().context("interactive session failed")?;

    tracing::info!(
        products = session.warehouse().products().len(),
        suppliers = session.warehouse().suppliers().len(),
        "session ended"
    );
    Ok(())
}
