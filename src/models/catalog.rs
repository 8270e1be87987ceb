use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// A named curriculum track.
///
/// Milestones are listed in the order a learner should tackle them; roadmap
/// generation always takes a prefix of this list.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct InterestPath {
    pub id: &'static str,
    pub resources: &'static [&'static str],
    pub milestones: &'static [&'static str],
    pub tips: &'static [&'static str],
}

/// An inspirational quote.
///
/// Built-in quotes borrow static text; quotes read back from JSON own theirs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Quote {
    pub text: Cow<'static, str>,
    pub author: Cow<'static, str>,
}

impl Quote {
    pub const fn new(text: &'static str, author: &'static str) -> Self {
        Self {
            text: Cow::Borrowed(text),
            author: Cow::Borrowed(author),
        }
    }
}
