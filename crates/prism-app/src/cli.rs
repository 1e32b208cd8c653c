use std::path::PathBuf;

use clap::Parser;

/// Prism: drives the animated portfolio page headless and reports on it.
#[derive(Parser, Debug)]
#[command(name = "prism", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory holding profile.json, skills.json and projects.json.
    #[arg(long)]
    pub content: Option<PathBuf>,

    /// Number of frames to run before tearing the page down.
    #[arg(long)]
    pub frames: Option<u32>,

    /// Seed for every random choice on the page.
    #[arg(long, default_value_t = 1)]
    pub seed: u64,

    /// Logical core count reported to the tier classifier.
    #[arg(long)]
    pub cores: Option<u32>,

    /// Device memory in GB reported to the tier classifier.
    #[arg(long)]
    pub memory_gb: Option<f32>,

    /// GPU renderer string, e.g. "Apple M1 Pro".
    #[arg(long)]
    pub renderer: Option<String>,

    /// Classify as a mobile device.
    #[arg(long)]
    pub mobile: bool,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::parse_from(["prism"]);
        assert_eq!(args.seed, 1);
        assert!(args.frames.is_none());
        assert!(!args.mobile);
    }

    #[test]
    fn device_overrides() {
        let args = Args::parse_from([
            "prism",
            "--cores",
            "8",
            "--memory-gb",
            "16",
            "--renderer",
            "Apple M1 Pro",
            "--mobile",
            "--frames",
            "120",
        ]);
        assert_eq!(args.cores, Some(8));
        assert_eq!(args.memory_gb, Some(16.0));
        assert_eq!(args.renderer.as_deref(), Some("Apple M1 Pro"));
        assert!(args.mobile);
        assert_eq!(args.frames, Some(120));
    }
}
