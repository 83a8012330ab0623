use fairshare_domain::CurrencyContext;
use fairshare_presentation::AmountFormat;
use std::{borrow::Cow, env};
use tracing_subscriber::EnvFilter;

const CURRENCY_SCALE_VAR: &str = "FAIRSHARE_CURRENCY_SCALE";
const CURRENCY_SYMBOL_VAR: &str = "FAIRSHARE_CURRENCY_SYMBOL";
const DEFAULT_CURRENCY_SCALE: u32 = 2;

/// Interpreter configuration read from the environment (and `.env`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub currency: CurrencyContext,
    pub symbol: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, Cow<'static, str>> {
        let _ = dotenvy::dotenv();
        Self::from_values(
            env::var(CURRENCY_SCALE_VAR).ok().as_deref(),
            env::var(CURRENCY_SYMBOL_VAR).ok().as_deref(),
        )
    }

    fn from_values(scale: Option<&str>, symbol: Option<&str>) -> Result<Self, Cow<'static, str>> {
        let scale = match scale.map(str::trim).filter(|value| !value.is_empty()) {
            Some(raw) => raw.parse::<u32>().map_err(|err| {
                format!("{CURRENCY_SCALE_VAR} must be a non-negative integer: {err}")
            })?,
            None => DEFAULT_CURRENCY_SCALE,
        };
        let currency = CurrencyContext::new(scale)
            .map_err(|err| format!("{CURRENCY_SCALE_VAR} is not usable: {err}"))?;

        Ok(Self {
            currency,
            symbol: symbol.unwrap_or_default().to_owned(),
        })
    }

    pub fn amount_format(&self) -> AmountFormat {
        AmountFormat::new(self.currency, self.symbol.clone())
    }
}

/// Initialize logging and tracing; `RUST_LOG` controls the filter.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
