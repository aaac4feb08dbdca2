//! Minimal yUML class-diagram model
//!
//! Only the pieces the renderers need: classes carrying notes, and simple
//! directed associations between them.

use std::collections::BTreeSet;
use std::fmt;

/// A class box. Declared once with its notes, referenced by name elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YumlClass {
    pub name: String,
    pub notes: Vec<String>,
}

impl YumlClass {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: sanitize(&name.into()),
            notes: Vec::new(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(sanitize(&note.into()));
        self
    }

    /// `[name|note;note;]`, or `[name]` without notes
    pub fn declaration(&self) -> String {
        if self.notes.is_empty() {
            return self.reference();
        }
        let notes: String = self.notes.iter().map(|note| format!("{note};")).collect();
        format!("[{}|{}]", self.name, notes)
    }

    pub fn reference(&self) -> String {
        format!("[{}]", self.name)
    }
}

/// `[parent]->[child]`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Association {
    pub parent: YumlClass,
    pub child: YumlClass,
}

impl fmt::Display for Association {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.parent.reference(), self.child.reference())
    }
}

/// Declarations and relationships, each kept sorted and free of duplicates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YumlDiagram {
    declarations: BTreeSet<String>,
    relationships: BTreeSet<String>,
}

impl YumlDiagram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare(&mut self, class: &YumlClass) {
        self.declarations.insert(class.declaration());
    }

    pub fn associate(&mut self, association: Association) {
        self.declare(&association.parent);
        self.declare(&association.child);
        self.relationships.insert(association.to_string());
    }

    pub fn declarations(&self) -> impl Iterator<Item = &str> {
        self.declarations.iter().map(String::as_str)
    }

    pub fn relationships(&self) -> impl Iterator<Item = &str> {
        self.relationships.iter().map(String::as_str)
    }

    pub fn relationship_count(&self) -> usize {
        self.relationships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relationships.is_empty()
    }

    /// One statement per line under `// Declarations` and `// Relationships`
    pub fn to_multiline(&self) -> String {
        let mut out = String::from("// Declarations\n");
        for declaration in &self.declarations {
            out.push_str(declaration);
            out.push('\n');
        }
        out.push_str("\n// Relationships\n");
        for relationship in &self.relationships {
            out.push_str(relationship);
            out.push('\n');
        }
        out
    }

    /// Every statement joined by `,`, the form the yUML endpoints accept
    pub fn to_dsl(&self) -> String {
        self.declarations
            .iter()
            .chain(self.relationships.iter())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}

// Brackets, pipes, semicolons and commas are yUML syntax
fn sanitize(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '[' | '{' => '(',
            ']' | '}' => ')',
            '|' | ';' | ',' => ' ',
            other => other,
        })
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    include!("yuml.test.rs");
}
