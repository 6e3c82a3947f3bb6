use std::{env, error::Error, net::SocketAddr, time::Duration};

pub const ENV_INFERENCE_URL: &str = "CHAT_RELAY_INFERENCE_URL";
pub const ENV_TIMEOUT_S: &str = "CHAT_RELAY_TIMEOUT_S";
pub const ENV_LISTEN_ADDR: &str = "CHAT_RELAY_LISTEN_ADDR";

const DEFAULT_TIMEOUT_S: u64 = 60;
const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub inference_url: String,
    pub timeout: Duration,
    pub listen_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn Error>> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Box<dyn Error>> {
        let inference_url =
            lookup(ENV_INFERENCE_URL).ok_or_else(|| format!("Expected env var: {}", ENV_INFERENCE_URL))?;

        let timeout_s = match lookup(ENV_TIMEOUT_S) {
            Some(raw) => raw
                .parse::<u64>()
                .map_err(|e| format!("Invalid {}={}: {}", ENV_TIMEOUT_S, raw, e))?,
            None => DEFAULT_TIMEOUT_S,
        };

        let listen_addr = lookup(ENV_LISTEN_ADDR).unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = listen_addr
            .parse::<SocketAddr>()
            .map_err(|e| format!("Invalid {}={}: {}", ENV_LISTEN_ADDR, listen_addr, e))?;

        Ok(Config {
            inference_url,
            timeout: Duration::from_secs(timeout_s),
            listen_addr,
        })
    }
}
