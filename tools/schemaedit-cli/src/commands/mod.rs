pub mod edit;
pub mod normalize;
pub mod show;
pub mod types;

use std::str::FromStr;

use schemaedit::editor::IdentityPolicy;

pub(crate) fn parse_identity_policy(raw: &str) -> Result<IdentityPolicy, String> {
    IdentityPolicy::from_str(raw)
}
