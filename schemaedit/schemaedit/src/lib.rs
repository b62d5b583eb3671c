mod defaults;
mod error;
mod ops;
mod schema_editor;

pub use defaults::{DEFAULT_SCHEMA_NAME, default_schema, demo_schema};
pub use error::SchemaEditorError;
pub use ops::EditOp;
pub use schema_editor::{SchemaEditor, SchemaEditorBuilder};
pub use schemaedit_core as core;
pub use schemaedit_editor as editor;
pub use schemaedit_json as json;
