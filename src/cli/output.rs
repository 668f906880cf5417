//! Output formatting shared across CLI commands.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use crate::log;

/// Serialize `value` as JSON and write it to `output`, or stdout when `None`.
///
/// `module` names the command in the log line confirming a file write.
pub fn write_json<T: Serialize>(
    module: &str,
    value: &T,
    pretty: bool,
    output: Option<&Path>,
) -> Result<()> {
    let formatted = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };

    if let Some(output_path) = output {
        let mut file = fs::File::create(output_path)?;
        writeln!(file, "{}", formatted)?;
        log!(module; "wrote output to {}", output_path.display());
    } else {
        println!("{}", formatted);
    }

    Ok(())
}
