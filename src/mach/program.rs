use serde::{Deserialize, Serialize};

/// ## Saved form of the operation stack
///
/// One display name per op, bottom of the stack first. Serializes as a
/// plain JSON array of strings.

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Program {
    tokens: Vec<String>,
}

impl Program {
    pub fn new() -> Program {
        Program::default()
    }
    pub fn len(&self) -> usize {
        self.tokens.len()
    }
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

impl From<Vec<String>> for Program {
    fn from(tokens: Vec<String>) -> Self {
        Program { tokens }
    }
}

impl From<Program> for Vec<String> {
    fn from(program: Program) -> Self {
        program.tokens
    }
}

impl<S: Into<String>> std::iter::FromIterator<S> for Program {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Program {
            tokens: iter.into_iter().map(|s| s.into()).collect(),
        }
    }
}

impl IntoIterator for Program {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;
    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;
    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.tokens.join(" "))
    }
}
