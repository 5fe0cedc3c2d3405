use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use std::fs;
use std::process::Command;

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();
        let path_str = path.to_string_lossy().to_string();

        if *print_config {
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            println!("{}", content);
            return Ok(());
        }

        if *check {
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            let parsed: Result<Config, _> = serde_yaml::from_str(&content);
            match parsed {
                Ok(_) => success("Configuration file is valid."),
                Err(e) => return Err(AppError::Config(e.to_string())),
            }
            return Ok(());
        }

        if *edit_config {
            let ed = editor
                .clone()
                .or_else(|| std::env::var("EDITOR").ok())
                .unwrap_or_else(|| "nano".into());

            Command::new(ed)
                .arg(&path_str)
                .status()
                .map_err(|e| AppError::Config(e.to_string()))?;
            return Ok(());
        }

        info(format!("Config file: {}", path_str));
    }
    Ok(())
}
