use confique::Config as _;
use std::sync::OnceLock;

#[derive(confique::Config)]
pub struct Config {
    /// Tracing filter used when `RUST_LOG` is not set.
    #[config(env = "SQLSPLIT_LOG", default = "info")]
    pub log: String,
    /// Largest script accepted by the binary, in bytes.
    #[config(env = "SQLSPLIT_MAX_INPUT_BYTES", default = 4194304)]
    pub max_input_bytes: usize,
}

pub fn config() -> &'static Config {
    static CONFIG: OnceLock<Config> = OnceLock::new();
    CONFIG.get_or_init(|| {
        Config::builder()
            .env()
            .load()
            .expect("Failed to load one or more value configuration from the current environment")
    })
}
