//! Qualified names: ordered sequences of identifier components, e.g. the
//! relation name in an atom or the target type of a [`TypeCast`](crate::argument::ArgumentKind::TypeCast).

use std::fmt;

/// An ordered sequence of identifier components (`foo.bar.Baz`). Equality is
/// sequence equality.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    components: Vec<String>,
}

impl QualifiedName {
    pub fn new(components: Vec<String>) -> Self {
        QualifiedName { components }
    }

    /// Build a single-component name.
    pub fn single(name: impl Into<String>) -> Self {
        QualifiedName {
            components: vec![name.into()],
        }
    }

    pub fn components(&self) -> &[String] {
        &self.components
    }

    pub fn prepend(&mut self, component: impl Into<String>) {
        self.components.insert(0, component.into());
    }

    pub fn append(&mut self, component: impl Into<String>) {
        self.components.push(component.into());
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.components.join("."))
    }
}

impl From<&str> for QualifiedName {
    fn from(s: &str) -> Self {
        QualifiedName::new(s.split('.').map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepend_and_append() {
        let mut name = QualifiedName::single("Baz");
        name.prepend("foo");
        name.append("qux");
        assert_eq!(name.to_string(), "foo.Baz.qux");
    }

    #[test]
    fn equality_is_sequence_equality() {
        assert_eq!(QualifiedName::from("a.b"), QualifiedName::new(vec!["a".into(), "b".into()]));
        assert_ne!(QualifiedName::from("a.b"), QualifiedName::from("b.a"));
    }
}
