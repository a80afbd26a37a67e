//! Board command - print board geometry for an external renderer

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use hexoust_server::board_info;

#[derive(Args)]
pub struct BoardArgs {
    /// Game config JSON file (radius and pixel layout)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Board radius (overrides the config file)
    #[arg(long)]
    pub radius: Option<i32>,

    /// Write to a file instead of stdout
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Also write the resolved game config, for later use with --config
    #[arg(long, value_name = "FILE")]
    pub save_config: Option<PathBuf>,
}

/// Run board command
pub fn run(args: BoardArgs) -> Result<()> {
    let config = crate::load_config(args.config.as_deref(), args.radius)?;
    let info = board_info(&config);
    let json = serde_json::to_string_pretty(&info)?;

    if let Some(path) = &args.save_config {
        config.save(path)?;
        tracing::info!("Saved game config to {}", path.display());
    }

    match &args.output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {} cells to {}", info.cell_count, path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", json)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_geometry_file() {
        let path = std::env::temp_dir().join(format!("hexoust-board-{}.json", std::process::id()));
        run(BoardArgs {
            config: None,
            radius: Some(2),
            output: Some(path.clone()),
            save_config: None,
        })
        .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        let json: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(json["radius"], 2);
        assert_eq!(json["cell_count"], 19);
        assert_eq!(json["hexes"].as_array().unwrap().len(), 19);
    }

    #[test]
    fn test_saved_config_loads_back() {
        let dir = std::env::temp_dir();
        let id = std::process::id();
        let output = dir.join(format!("hexoust-board-out-{id}.json"));
        let saved = dir.join(format!("hexoust-board-config-{id}.json"));

        run(BoardArgs {
            config: None,
            radius: Some(4),
            output: Some(output.clone()),
            save_config: Some(saved.clone()),
        })
        .unwrap();

        let loaded = crate::load_config(Some(&saved), None);
        let _ = std::fs::remove_file(&output);
        let _ = std::fs::remove_file(&saved);
        let loaded = loaded.unwrap();
        assert_eq!(loaded.radius, 4);
        assert_eq!(loaded.layout, hexoust_core::Layout::default());
    }
}
