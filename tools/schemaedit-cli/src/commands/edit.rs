use std::{cell::RefCell, path::PathBuf, rc::Rc};

use anyhow::{Context, Result, bail};
use clap::Args;
use schemaedit::{EditOp, SchemaEditor, editor::IdentityPolicy, json::descriptor_to_string};
use tracing::info;

use super::parse_identity_policy;
use crate::output;

#[derive(Args)]
pub struct EditArgs {
    /// Path to the JSON schema
    input: PathBuf,

    /// Edit operation, e.g. "set-type field[1]/items long" (repeatable, applied in order)
    #[arg(long = "op", value_name = "OP", required = true)]
    ops: Vec<String>,

    /// Record identity policy: preserve | regenerate
    #[arg(long, value_parser = parse_identity_policy, default_value = "preserve")]
    identity: IdentityPolicy,

    /// Prefix for generated record identities
    #[arg(long, default_value = "record")]
    record_prefix: String,

    /// Print every emitted descriptor, not only the last
    #[arg(long)]
    all: bool,

    /// Output file path (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl EditArgs {
    pub fn run(self) -> Result<()> {
        let ops = self
            .ops
            .iter()
            .map(|raw| raw.parse::<EditOp>())
            .collect::<Result<Vec<_>, _>>()?;

        let emitted = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&emitted);
        let builder = SchemaEditor::builder()
            .with_identity_policy(self.identity)
            .with_record_prefix(self.record_prefix)
            .on_change(move |ty| sink.borrow_mut().push(ty.clone()));
        let mut editor = output::load(builder, &self.input)?;

        for op in &ops {
            editor
                .apply(op)
                .with_context(|| format!("failed to apply '{op}'"))?;
        }
        info!(ops = ops.len(), emissions = emitted.borrow().len(), "edits applied");

        let emitted = emitted.borrow();
        let text = if self.all {
            let docs = emitted
                .iter()
                .map(descriptor_to_string)
                .collect::<Result<Vec<_>, _>>()?;
            docs.join("\n")
        } else {
            match emitted.last() {
                Some(last) => descriptor_to_string(last)?,
                None => bail!("schema has unresolved types; nothing was emitted"),
            }
        };
        output::write(self.output.as_deref(), &text)
    }
}
