use std::{cell::RefCell, path::PathBuf, rc::Rc};

use anyhow::{Result, bail};
use clap::Args;
use schemaedit::{SchemaEditor, editor::IdentityPolicy, json::descriptor_to_string};

use super::parse_identity_policy;
use crate::output;

#[derive(Args)]
pub struct NormalizeArgs {
    /// Path to the JSON schema
    input: PathBuf,

    /// Record identity policy: preserve | regenerate
    #[arg(long, value_parser = parse_identity_policy, default_value = "preserve")]
    identity: IdentityPolicy,

    /// Prefix for generated record identities
    #[arg(long, default_value = "record")]
    record_prefix: String,

    /// Output file path (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl NormalizeArgs {
    pub fn run(self) -> Result<()> {
        let emitted = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&emitted);
        let builder = SchemaEditor::builder()
            .with_identity_policy(self.identity)
            .with_record_prefix(self.record_prefix)
            .on_change(move |ty| *sink.borrow_mut() = Some(ty.clone()));
        output::load(builder, &self.input)?;

        let Some(descriptor) = emitted.borrow_mut().take() else {
            bail!("schema has unresolved types; nothing was emitted");
        };
        output::write(self.output.as_deref(), &descriptor_to_string(&descriptor)?)
    }
}
