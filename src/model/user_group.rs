//! User tier codes and their display attributes.

use serde::{Deserialize, Serialize};

/// Integer-coded user tier as sent by the API (`author_group`).
///
/// Any integer decodes; [`UserGroup::name`] and [`UserGroup::color`] are
/// defined only for the known codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserGroup(pub i32);

impl UserGroup {
    /// New account.
    pub const GREEN: Self = Self(0);
    /// Established account.
    pub const ORANGE: Self = Self(1);
    /// Long-standing account.
    pub const MAROON: Self = Self(2);
    /// Site administrator.
    pub const ADMIN: Self = Self(5);
    /// Banned account.
    pub const BANNED: Self = Self(1001);
    /// Deleted account.
    pub const DELETED: Self = Self(1002);
    /// Commercial client account.
    pub const CLIENT: Self = Self(2001);

    /// Whether the code has display attributes.
    #[must_use]
    pub fn is_known(self) -> bool {
        matches!(self.0, 0 | 1 | 2 | 5 | 1001 | 1002 | 2001)
    }

    /// Display color as a CSS hex string.
    ///
    /// # Panics
    ///
    /// Panics on an unmapped group code; callers must only ask for codes the
    /// API documents.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::GREEN | Self::ORANGE => "#339933",
            Self::MAROON => "#BB0000",
            Self::ADMIN => "#000000",
            Self::BANNED | Self::DELETED => "#999999",
            Self::CLIENT => "#3F6FA0",
            Self(code) => panic!("unknown user group code {code}"),
        }
    }

    /// Display name (Polish, as shown on the site).
    ///
    /// # Panics
    ///
    /// Panics on an unmapped group code.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::GREEN => "Zielony",
            Self::ORANGE => "Pomarańczowy",
            Self::MAROON => "Bordowy",
            Self::ADMIN => "Administrator",
            Self::BANNED => "Zbanowany",
            Self::DELETED => "Usunięty",
            Self::CLIENT => "Klient",
            Self(code) => panic!("unknown user group code {code}"),
        }
    }
}
