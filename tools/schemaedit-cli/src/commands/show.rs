use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use schemaedit::SchemaEditor;

use crate::output;

#[derive(Args)]
pub struct ShowArgs {
    /// Path to the JSON schema
    input: PathBuf,

    /// Print the canonical descriptor instead of the editor rows
    #[arg(short, long)]
    descriptor: bool,

    /// Output file path (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl ShowArgs {
    pub fn run(self) -> Result<()> {
        let mut editor = output::load(SchemaEditor::builder(), &self.input)?;
        let text = if self.descriptor {
            let descriptor = editor
                .current()
                .ok_or_else(|| anyhow::anyhow!("schema has unresolved types"))?;
            descriptor.to_string()
        } else {
            editor.render()?
        };
        output::write(self.output.as_deref(), text.trim_end())
    }
}
