//! Category path from the walk root down to the node being expanded

/// Categories from the walk root down to, and including, the node currently
/// being expanded.
///
/// One path is shared by the whole walk: a category is pushed when its
/// expansion starts and popped when it ends, so a branch only ever sees its
/// own ancestors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AncestorPath(Vec<String>);

impl AncestorPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: &str) {
        self.0.push(name.to_string());
    }

    pub fn pop(&mut self) -> Option<String> {
        self.0.pop()
    }

    /// Category being expanded, empty before the walk starts
    pub fn current(&self) -> &str {
        self.0.last().map(String::as_str).unwrap_or_default()
    }

    /// Whether `name` is above the current category. The current one itself
    /// does not count.
    pub fn has_ancestor(&self, name: &str) -> bool {
        let above = self.0.len().saturating_sub(1);
        self.0[..above].iter().any(|n| n == name)
    }

    /// Trace line for a discovered child: `a - b - current - child`
    pub fn trace(&self, child: &str) -> String {
        let mut line = String::new();
        for name in &self.0 {
            line.push_str(name);
            line.push_str(" - ");
        }
        line.push_str(child);
        line
    }
}
