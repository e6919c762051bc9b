//! Play calls and how raw menu input maps onto them.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayCall {
    ShortPass,
    DeepPass,
    Run,
    /// Anything the huddle could not make sense of.
    Miscommunication,
}

impl PlayCall {
    /// Selectable calls in menu order, paired with their menu number.
    pub const MENU: [(i64, Self); 3] = [(1, Self::ShortPass), (2, Self::DeepPass), (3, Self::Run)];

    #[must_use]
    pub const fn from_choice(choice: i64) -> Self {
        match choice {
            1 => Self::ShortPass,
            2 => Self::DeepPass,
            3 => Self::Run,
            _ => Self::Miscommunication,
        }
    }

    /// Parse one token of menu input the way a stream reads an integer:
    /// leading whitespace is skipped and the `[+-]digits` prefix is kept, so
    /// `2abc` calls a deep pass. A token with no leading digits, or one too
    /// large for `i64`, is a miscommunication rather than an error.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let token = input.trim_start();
        let sign_len = usize::from(token.starts_with(['+', '-']));
        let digits = token[sign_len..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        if digits == 0 {
            return Self::Miscommunication;
        }
        token[..sign_len + digits]
            .parse::<i64>()
            .map_or(Self::Miscommunication, Self::from_choice)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ShortPass => "Short Pass",
            Self::DeepPass => "Deep Pass",
            Self::Run => "Run",
            Self::Miscommunication => "Miscommunication",
        }
    }
}

impl std::fmt::Display for PlayCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
