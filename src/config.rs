#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub max_file_size: u64,
    pub output: OutputFormat,
}

const DEFAULT_MAX_FILE_SIZE_MB: u64 = 25;

impl Default for Config {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE_MB * 1024 * 1024,
            output: OutputFormat::Text,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let max_file_size_mb = std::env::var("MAX_FILE_SIZE_MB")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_MAX_FILE_SIZE_MB);

        let output = std::env::var("TCX_OUTPUT")
            .ok()
            .and_then(|s| OutputFormat::from_name(&s))
            .unwrap_or(OutputFormat::Text);

        Self {
            max_file_size: max_file_size_mb * 1024 * 1024,
            output,
        }
    }
}
