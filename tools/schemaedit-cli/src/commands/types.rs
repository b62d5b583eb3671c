use anyhow::Result;
use clap::Args;
use schemaedit::core::{SCHEMA_TYPES, check_complex_type};

#[derive(Args)]
pub struct TypesArgs {
    /// Only list tags that open a nested editor
    #[arg(long)]
    complex: bool,
}

impl TypesArgs {
    pub fn run(self) -> Result<()> {
        for tag in SCHEMA_TYPES {
            let complex = check_complex_type(tag.as_str());
            if self.complex && !complex {
                continue;
            }
            let kind = if complex { "complex" } else { "primitive" };
            println!("{:<10} {kind}", tag.as_str());
        }
        Ok(())
    }
}
