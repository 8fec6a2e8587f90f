use std::path::Path;

use anyhow::Result;

use wordpack_core::config::{ConvertOptions, CONFIG_FILE};

use crate::output;

/// Write a config file holding the default conversion settings.
///
/// Refuses to replace an existing file unless `force` is set.
pub fn run(config_path: Option<&Path>, force: bool) -> Result<()> {
    let path = config_path.unwrap_or(Path::new(CONFIG_FILE));

    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    ConvertOptions::default().save(path)?;
    tracing::info!(path = %path.display(), "wrote default config");
    output::print_success(&format!("Created {}", path.display()));

    Ok(())
}
