use serde::{Deserialize, Serialize};

/// Day B's formatted value for one field, with the signed change from Day A.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldComparison {
    /// Formatted Day B value, or the missing glyph.
    pub value: String,
    /// Signed `B - A` ("+5.0", "-1.2"), or the missing glyph unless both sides are present.
    pub delta: String,
}
