use crate::handler::HeaderMode;
use anyhow::{bail, Context, Result};
use std::env;

const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, Copy)]
pub struct Config {
    pub port: u16,
    pub header_mode: HeaderMode,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("Invalid PORT value: {raw}"))?,
            Err(_) => DEFAULT_PORT,
        };
        let header_mode = match env::var("COMPUTE_TYPE_HEADER") {
            Ok(raw) => match raw.as_str() {
                "true" | "1" => HeaderMode::ComputeType,
                "false" | "0" => HeaderMode::Plain,
                other => bail!("Invalid COMPUTE_TYPE_HEADER value: {other}"),
            },
            Err(_) => HeaderMode::ComputeType,
        };
        Ok(Self { port, header_mode })
    }
}
