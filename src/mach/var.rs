use std::collections::HashMap;

/// ## Variable memory
///
/// Values are set by whoever drives the engine. An unset name has no
/// value, which makes any expression that reads it incomplete.

#[derive(Debug, Default, Clone)]
pub struct Var {
    vars: HashMap<String, f64>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
    }

    pub fn fetch(&self, var_name: &str) -> Option<f64> {
        self.vars.get(var_name).copied()
    }

    pub fn store<S: Into<String>>(&mut self, var_name: S, value: f64) -> Option<f64> {
        self.vars.insert(var_name.into(), value)
    }

    pub fn remove(&mut self, var_name: &str) -> Option<f64> {
        self.vars.remove(var_name)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<S: Into<String>> std::iter::FromIterator<(S, f64)> for Var {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Var {
            vars: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<S: Into<String>> Extend<(S, f64)> for Var {
    fn extend<I: IntoIterator<Item = (S, f64)>>(&mut self, iter: I) {
        self.vars.extend(iter.into_iter().map(|(k, v)| (k.into(), v)));
    }
}
