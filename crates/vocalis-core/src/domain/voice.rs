//! Voice metadata.

use serde::{Deserialize, Serialize};

use super::service::ServiceKind;

/// A selectable voice offered by one of the speech services.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voice {
    /// Voice id passed to the backend at submission time.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Service this voice belongs to.
    pub service: ServiceKind,

    /// CSS gradient string for the voice swatch. Display only.
    pub gradient_colors: String,
}

impl Voice {
    /// Convenience constructor for tests and fixtures.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        service: ServiceKind,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            service,
            gradient_colors: String::new(),
        }
    }
}
