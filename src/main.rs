use anyhow::Context;
use clap::Parser;
use countup::config::Config;
use countup::logging::init_tracing;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "countup", version, about = "Terminal counter")]
struct Args {
    /// Config file (default: ~/.config/countup/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write logs to this file (overrides COUNTUP_LOG)
    #[arg(long, value_name = "PATH")]
    log: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;

    if let Some(log_file) = init_tracing(args.log, &config.logging.filter) {
        tracing::info!(path = %log_file.display(), "Logging initialized");
    }

    countup::ui::run(&config).context("terminal UI failed")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Args;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn parses_without_flags() {
        let args = Args::try_parse_from(["countup"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.log.is_none());
    }

    #[test]
    fn parses_config_and_log_paths() {
        let args =
            Args::try_parse_from(["countup", "--config", "c.toml", "--log", "out.log"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("c.toml")));
        assert_eq!(args.log, Some(PathBuf::from("out.log")));
    }
}
