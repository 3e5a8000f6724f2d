use std::fs;
use std::path::Path;

use recvcheck_core::config::{CheckerConfig, CONFIG_FILE_NAME};

/// Run `recvcheck init`: write a default `.recvcheck.json` in the current directory.
pub fn run(verbose: bool) -> i32 {
    let cwd = match std::env::current_dir() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("recvcheck init: failed to get current directory: {}", e);
            return 2;
        }
    };
    match write_default_config(&cwd) {
        Ok(()) => {
            if verbose {
                eprintln!("recvcheck init: wrote {}", cwd.join(CONFIG_FILE_NAME).display());
            }
            0
        }
        Err(msg) => {
            eprintln!("recvcheck init: {}", msg);
            2
        }
    }
}

/// Refuses to overwrite an existing config.
fn write_default_config(root: &Path) -> Result<(), String> {
    let config_path = root.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        return Err(format!("{} already exists", CONFIG_FILE_NAME));
    }
    let json = serde_json::to_string_pretty(&CheckerConfig::default())
        .map_err(|e| format!("failed to serialize config: {}", e))?;
    fs::write(&config_path, json + "\n").map_err(|e| format!("failed to write config: {}", e))
}
