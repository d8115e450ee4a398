use anyhow::Context;
use terminal_portfolio::{repl, Settings};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let settings = Settings::from_env().context("loading portfolio settings")?;
    log::info!("starting portfolio console as {}", settings.identity);
    repl::start_repl(&settings)
}
