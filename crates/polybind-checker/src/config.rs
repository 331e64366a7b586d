//! Legality configuration.
//!
//! ```json
//! { "permitAnyInParams": false, "permitAnyInReturns": true }
//! ```
//!
//! Missing keys take their defaults (both `false`). A method that permits any
//! type on its own declaration is relaxed regardless of these settings.

use crate::method::MethodDecl;
use crate::usage::UsagePosition;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct LegalityConfig {
    pub permit_any_in_params: bool,
    pub permit_any_in_returns: bool,
}

impl LegalityConfig {
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Effective `allow_any` for a position on `method`.
    pub fn allow_any(&self, method: &MethodDecl, position: UsagePosition) -> bool {
        let default = match position {
            UsagePosition::Parameter => self.permit_any_in_params,
            UsagePosition::Return => self.permit_any_in_returns,
        };
        default || method.permits_any_type
    }
}
