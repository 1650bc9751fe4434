//! Identifier sentinels.

use bedrock_common::{NULL_TUID, NULL_UUID};
use uuid::Uuid;

/// Exact string comparison with [`NULL_TUID`].
pub fn is_null_tuid(id: &str) -> bool {
    id == NULL_TUID
}

/// Exact string comparison with [`NULL_UUID`]. Uppercase or braced
/// spellings of the nil UUID are not recognised.
pub fn is_null_uuid(id: &str) -> bool {
    id == NULL_UUID
}

pub fn nil_uuid() -> Uuid {
    Uuid::nil()
}
