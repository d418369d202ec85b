use serde::{Deserialize, Serialize};

/// One closed enumeration for token kinds and container kinds, so every
/// dispatch over kinds is an exhaustive match.
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum SyntaxKind {
    EOF,
    SPACE,
    LINE,
    OPERATOR,
    STRING,
    QUOTE,
    OPEN_BRACE,
    CLOSE_BRACE,

    ROOT,
    SPACE_GROUP,
    OPERATOR_GROUP,
    QUOTE_GROUP,
    BRACE_GROUP,
}

impl SyntaxKind {
    /// Containers group other nodes; the remaining kinds carry literal text.
    pub fn is_container(self) -> bool {
        matches!(
            self,
            Self::ROOT
                | Self::SPACE_GROUP
                | Self::OPERATOR_GROUP
                | Self::QUOTE_GROUP
                | Self::BRACE_GROUP
        )
    }

    pub fn is_trivia(self) -> bool {
        matches!(self, Self::SPACE | Self::LINE)
    }
}
