use anyhow::Result;
use env_logger::Env;

pub fn setup_logger() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).try_init()?;
    Ok(())
}
