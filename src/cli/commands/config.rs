use crate::config::Config;
use crate::errors::{AppError, AppResult};

use crate::cli::parser::Commands;
use crate::ui::messages::{success, warning};
use std::process::Command;

const EXPECTED_FIELDS: [&str; 3] = ["database", "default_user", "default_fasting_type"];

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            let yaml = serde_yaml::to_string(&cfg)
                .map_err(|e| AppError::Config(format!("Failed to serialize config: {e}")))?;
            println!("{}", yaml);
        }

        // ---- CHECK CONFIG ----
        if *check {
            let content = std::fs::read_to_string(&path)
                .map_err(|_| AppError::Config(format!("Config file not found: {:?}", path)))?;

            let yaml: serde_yaml::Value = serde_yaml::from_str(&content)
                .map_err(|e| AppError::Config(format!("Failed to parse config: {e}")))?;

            let missing: Vec<&str> = match yaml.as_mapping() {
                Some(map) => EXPECTED_FIELDS
                    .iter()
                    .filter(|f| !map.contains_key(&serde_yaml::Value::String(f.to_string())))
                    .copied()
                    .collect(),
                None => EXPECTED_FIELDS.to_vec(),
            };

            if missing.is_empty() {
                success("Configuration file is complete.");
            } else {
                for f in missing {
                    warning(format!("Missing field: {f} (a default will be used)"));
                }
            }
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            let requested_editor = editor.clone();

            let default_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });

            let editor_to_use = requested_editor.unwrap_or_else(|| default_editor.clone());

            let status = Command::new(&editor_to_use).arg(&path).status();

            match status {
                Ok(s) if s.success() => {
                    println!(
                        "✅ Configuration file edited successfully using '{}'",
                        editor_to_use
                    );
                }
                Ok(_) | Err(_) => {
                    eprintln!(
                        "⚠️  Editor '{}' not available, falling back to '{}'",
                        editor_to_use, default_editor
                    );

                    let fallback_status = Command::new(&default_editor).arg(&path).status();
                    match fallback_status {
                        Ok(s) if s.success() => {
                            println!(
                                "✅ Configuration file edited successfully using fallback '{}'",
                                default_editor
                            );
                        }
                        Ok(_) | Err(_) => {
                            eprintln!(
                                "❌ Failed to edit configuration file using fallback '{}'",
                                default_editor
                            );
                        }
                    }
                }
            }
        }
    }

    Ok(())
}
