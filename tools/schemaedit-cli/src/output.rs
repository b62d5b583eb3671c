use std::{fs, path::Path};

use anyhow::{Context, Result};
use schemaedit::{SchemaEditor, SchemaEditorBuilder};

/// Read a JSON schema file and build an editor over it.
pub fn load(builder: SchemaEditorBuilder, path: &Path) -> Result<SchemaEditor> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    builder
        .build_from_json_str(&text)
        .with_context(|| format!("failed to load schema from {}", path.display()))
}

/// Write `text` to `output`, or to stdout when no path is given.
pub fn write(output: Option<&Path>, text: &str) -> Result<()> {
    match output {
        Some(path) => fs::write(path, format!("{text}\n"))
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{text}"),
    }
    Ok(())
}
