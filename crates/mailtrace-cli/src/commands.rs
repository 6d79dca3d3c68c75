use super::args::{Cli, Commands};
use super::handlers;
use crate::config::Config;
use anyhow::Result;
use std::path::PathBuf;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = expand_tilde(&cli.data_dir);
    let config_path = data_dir.join("config.toml");

    match cli.command {
        Commands::Run { log_file, verbose } => {
            let config = Config::load_from(&config_path)?;
            handlers::run::handle(&data_dir, &config, &log_file, verbose)
        }

        Commands::Report => {
            let config = Config::load_from(&config_path)?;
            handlers::report::handle(&data_dir, &config)
        }

        Commands::Init => handlers::init::handle(&data_dir),
    }
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(stripped);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_tilde_passthrough_for_absolute_path() {
        assert_eq!(expand_tilde("/data/mt"), PathBuf::from("/data/mt"));
    }

    #[test]
    fn test_expand_tilde_resolves_home() {
        unsafe { std::env::set_var("HOME", "/home/tester") };
        assert_eq!(
            expand_tilde("~/.mailtrace"),
            PathBuf::from("/home/tester/.mailtrace")
        );
    }
}
