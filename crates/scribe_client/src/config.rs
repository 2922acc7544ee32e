use anyhow::anyhow;

pub const BASE_URL_ENV: &str = "SCRIBE_API_URL";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Where the assistant API lives. Read once at startup.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let base_url =
            optional_trimmed_var(BASE_URL_ENV)?.unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        Ok(Self { base_url })
    }
}

fn optional_trimmed_var(name: &str) -> anyhow::Result<Option<String>> {
    let value = match std::env::var_os(name) {
        Some(value) => value,
        None => return Ok(None),
    };

    let value = value.to_string_lossy();
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(anyhow!("{name} is set but empty"));
    }

    Ok(Some(trimmed.to_owned()))
}
