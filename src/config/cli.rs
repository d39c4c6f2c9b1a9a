use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "cable-splitter")]
#[command(about = "Split a cable into evenly sized, sequentially named pieces")]
pub struct CliConfig {
    /// Length of the cable to split
    #[arg(long, allow_negative_numbers = true)]
    pub length: String,

    /// Name of the cable; pieces are named {name}-{index}
    #[arg(long)]
    pub name: String,

    /// Number of cuts to make
    #[arg(long, allow_negative_numbers = true)]
    pub times: String,

    /// Path to a TOML file overriding the splitter limits
    #[arg(short, long)]
    pub config: Option<String>,

    /// Print the pieces as JSON
    #[arg(long)]
    pub json: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Raw arguments as JSON values, so type errors surface as `InvalidArgumentType`.
    pub fn split_arguments(&self) -> (serde_json::Value, serde_json::Value) {
        let cable = serde_json::json!({
            "length": parse_scalar(&self.length),
            "name": self.name,
        });
        (cable, parse_scalar(&self.times))
    }
}

fn parse_scalar(raw: &str) -> serde_json::Value {
    serde_json::from_str(raw).unwrap_or_else(|_| serde_json::Value::String(raw.to_string()))
}
