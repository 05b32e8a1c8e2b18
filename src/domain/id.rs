use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Length of the random part of a generated id
const RANDOM_LEN: usize = 9;

/// Builds `<prefix>_<unix-millis>_<random>` (e.g. `card_1718000000000_3f9a0c1b2`)
fn generate(prefix: &str) -> String {
    let random = Uuid::new_v4().simple().to_string();
    format!(
        "{}_{}_{}",
        prefix,
        Utc::now().timestamp_millis(),
        &random[..RANDOM_LEN]
    )
}

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            const PREFIX: &'static str = $prefix;

            /// Generates a fresh, unique id
            pub fn generate() -> Self {
                Self(generate(Self::PREFIX))
            }

            /// Returns the string representation
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Identifier of a board
    BoardId,
    "board"
);
entity_id!(
    /// Identifier of a column, unique across all boards
    ColumnId,
    "column"
);
entity_id!(
    /// Identifier of a card, unique across all columns
    CardId,
    "card"
);
