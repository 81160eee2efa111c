use crate::config::Config;

#[derive(Debug, Clone, PartialEq)]
struct Variable {
    name: String,
    value: String,
}

/// Interpreter-local variables, kept in insertion order.
///
/// Nothing is imported from or exported to the host process environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Environment {
    vars: Vec<Variable>,
    capacity: usize,
    max_name_len: usize,
    max_value_len: usize,
}

impl Environment {
    pub fn new(config: &Config) -> Self {
        Environment {
            vars: Vec::new(),
            capacity: config.max_vars,
            max_name_len: config.max_name_len,
            max_value_len: config.max_value_len,
        }
    }

    /// Looks up `name` exactly; a name longer than the limit was never stored.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars
            .iter()
            .find(|var| var.name == name)
            .map(|var| var.value.as_str())
    }

    /// Overwrites an existing entry in place or appends a new one.
    /// A full store drops the insertion without complaint.
    pub fn set(&mut self, name: &str, value: &str) {
        let name = truncate(name, self.max_name_len);
        let value = truncate(value, self.max_value_len);

        if let Some(var) = self.vars.iter_mut().find(|var| var.name == name) {
            var.value = value.to_string();
            return;
        }

        if self.vars.len() < self.capacity {
            self.vars.push(Variable {
                name: name.to_string(),
                value: value.to_string(),
            });
        } else {
            log::debug!("variable store full, dropping '{}'", name);
        }
    }

    pub fn unset(&mut self, name: &str) {
        if let Some(idx) = self.vars.iter().position(|var| var.name == name) {
            // Vec::remove shifts the tail left, keeping order.
            self.vars.remove(idx);
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    #[cfg(test)]
    pub fn all(&self) -> Vec<(String, String)> {
        self.vars
            .iter()
            .map(|var| (var.name.clone(), var.value.clone()))
            .collect()
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new(&Config::default())
    }
}

/// Cuts `s` to at most `max` characters.
fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
