use std::io;

use anyhow::Context;

use stockroom_cli::{Config, Console};

fn main() -> anyhow::Result<()> {
    let (config, rejected) = Config::from_env();
    stockroom_observability::init(config.log_format);
    for message in &rejected {
        tracing::warn!("{message}");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), &config);

    console.run().context("inventory session aborted")?;
    Ok(())
}
