//! Data-dictionary records

use serde::{Deserialize, Serialize};

/// External vocabulary identifier such as `HP:0000118` or a full IRI.
/// An empty identifier means "no term".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TermReference(String);

impl TermReference {
    pub fn new<S: Into<String>>(identifier: S) -> Self {
        Self(identifier.into())
    }

    pub fn identifier(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for TermReference {
    fn from(s: &str) -> Self {
        TermReference::new(s)
    }
}

/// One permissible value of an enumerated field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub value: String,
    pub label: String,
}

impl Choice {
    pub fn new<V: Into<String>, L: Into<String>>(value: V, label: L) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// One field definition of a data dictionary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataDictionaryRecord {
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub section: String,
    #[serde(default)]
    pub see_also: Option<String>,
    #[serde(default)]
    pub enumeration: Option<Vec<Choice>>,
    #[serde(default)]
    pub terms: Vec<TermReference>,
}

impl DataDictionaryRecord {
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self {
            id: id.into(),
            label: String::new(),
            description: String::new(),
            section: String::new(),
            see_also: None,
            enumeration: None,
            terms: Vec::new(),
        }
    }

    pub fn with_label<S: Into<String>>(mut self, label: S) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_section<S: Into<String>>(mut self, section: S) -> Self {
        self.section = section.into();
        self
    }

    pub fn with_see_also<S: Into<String>>(mut self, see_also: S) -> Self {
        self.see_also = Some(see_also.into());
        self
    }

    pub fn with_choice(mut self, choice: Choice) -> Self {
        self.enumeration.get_or_insert_with(Vec::new).push(choice);
        self
    }

    pub fn with_term<T: Into<TermReference>>(mut self, term: T) -> Self {
        self.terms.push(term.into());
        self
    }
}
