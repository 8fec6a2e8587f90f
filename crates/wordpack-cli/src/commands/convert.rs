use std::path::Path;

use anyhow::Result;

use wordpack_core::config::{ConvertOptions, Exposure, CONFIG_FILE};

use crate::output;
use crate::ConvertArgs;

/// Convert the word list into a JavaScript data file.
///
/// Starts from the defaults, layers the config file on top (required only when
/// `--config` was passed), then applies flags. Prints exactly two lines on success.
pub fn run(config_path: Option<&Path>, args: ConvertArgs) -> Result<()> {
    let options = resolve_options(config_path, args)?;
    tracing::debug!(?options, "resolved conversion options");

    let report = wordpack_core::convert(&options)?;

    let file_name = report
        .output
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| report.output.display().to_string());
    output::print_success(&format!("Created {file_name} successfully!"));
    output::print_size(report.chars);

    Ok(())
}

fn resolve_options(config_path: Option<&Path>, args: ConvertArgs) -> Result<ConvertOptions> {
    let mut options = match config_path {
        Some(path) => ConvertOptions::load(path)?,
        None => ConvertOptions::load_or_default(Path::new(CONFIG_FILE))?,
    };

    if let Some(input) = args.input {
        options.input = input;
    }
    if let Some(output) = args.output {
        options.output = output;
    }
    if let Some(name) = args.name {
        options.constant_name = name;
    }
    if args.module {
        options.exposure = Exposure::Module;
    } else if let Some(object) = args.global {
        options.exposure = Exposure::Global { object };
    }

    Ok(options)
}
