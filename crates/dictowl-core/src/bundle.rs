//! Supplementary axiom bundle
//!
//! A fixed ontology document, compiled into the crate, that is merged into
//! every generated axiom set. The document is a compact JSON-LD graph: an
//! `@context` of prefix mappings and an `@graph` of nodes whose keys are
//! compact or absolute predicate IRIs.

use crate::loader::{AxiomLoader, DefaultAxiomLoader, Object, Triple};
use crate::model::{AxiomSet, Literal};
use crate::vocabulary;
use crate::BundleError;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use tracing::debug;

const DEFINITIONS: &str = include_str!("../resources/definitions.jsonld");

/// Raw bundle document
#[derive(Debug, Clone, Deserialize)]
pub struct BundleDocument {
    #[serde(rename = "@context", default)]
    pub context: HashMap<String, String>,
    #[serde(rename = "@graph")]
    pub graph: Vec<Map<String, Value>>,
}

impl BundleDocument {
    /// Expand a compact IRI (`prefix:local`) against the context
    fn expand(&self, term: &str) -> Result<String, BundleError> {
        if term.contains("://") {
            return Ok(term.to_string());
        }
        match term.split_once(':') {
            Some((prefix, local)) => match self.context.get(prefix) {
                Some(base) => Ok(format!("{}{}", base, local)),
                None => Err(BundleError::Malformed(format!("unknown prefix in '{}'", term))),
            },
            None => Err(BundleError::Malformed(format!("'{}' is not an IRI", term))),
        }
    }

    /// Flatten the graph into triples
    pub fn to_triples(&self) -> Result<Vec<Triple>, BundleError> {
        let mut triples = Vec::new();

        for node in &self.graph {
            let subject = match node.get("@id") {
                Some(Value::String(id)) => self.expand(id)?,
                _ => return Err(BundleError::Malformed("node without string @id".to_string())),
            };

            for (key, value) in node {
                match key.as_str() {
                    "@id" => {}
                    "@type" => {
                        for t in string_or_array(value)? {
                            triples.push(Triple {
                                subject: subject.clone(),
                                predicate: vocabulary::RDF_TYPE.to_string(),
                                object: Object::Iri(self.expand(t)?),
                            });
                        }
                    }
                    k if k.starts_with('@') => {
                        return Err(BundleError::Malformed(format!("unsupported keyword {}", k)));
                    }
                    k => {
                        let predicate = self.expand(k)?;
                        let values: Vec<&Value> = match value {
                            Value::Array(items) => items.iter().collect(),
                            single => vec![single],
                        };
                        for v in values {
                            triples.push(Triple {
                                subject: subject.clone(),
                                predicate: predicate.clone(),
                                object: self.object(v)?,
                            });
                        }
                    }
                }
            }
        }

        Ok(triples)
    }

    fn object(&self, value: &Value) -> Result<Object, BundleError> {
        match value {
            Value::String(s) => Ok(Object::Literal(Literal::String(s.clone()))),
            Value::Number(n) => n
                .as_i64()
                .map(|n| Object::Literal(Literal::Integer(n)))
                .ok_or_else(|| BundleError::UnsupportedStatement(format!("non-integer number {}", n))),
            Value::Object(map) => {
                if let Some(Value::String(id)) = map.get("@id") {
                    Ok(Object::Iri(self.expand(id)?))
                } else if let Some(inner) = map.get("@value") {
                    match inner {
                        Value::String(_) | Value::Number(_) => self.object(inner),
                        other => Err(BundleError::UnsupportedStatement(format!("@value {}", other))),
                    }
                } else {
                    Err(BundleError::Malformed(format!("object without @id or @value: {}", value)))
                }
            }
            other => Err(BundleError::UnsupportedStatement(format!("value {}", other))),
        }
    }
}

fn string_or_array(value: &Value) -> Result<Vec<&str>, BundleError> {
    match value {
        Value::String(s) => Ok(vec![s.as_str()]),
        Value::Array(items) => items
            .iter()
            .map(|item| {
                item.as_str()
                    .ok_or_else(|| BundleError::Malformed(format!("@type entry {}", item)))
            })
            .collect(),
        other => Err(BundleError::Malformed(format!("@type {}", other))),
    }
}

/// Parsed supplementary axioms
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupplementaryBundle {
    axioms: AxiomSet,
}

impl SupplementaryBundle {
    /// The definitions document shipped with the crate
    pub fn load() -> Result<Self, BundleError> {
        Self::from_json_str(DEFINITIONS)
    }

    pub fn from_json_str(document: &str) -> Result<Self, BundleError> {
        let document: BundleDocument = serde_json::from_str(document)?;
        let triples = document.to_triples()?;
        let axioms = DefaultAxiomLoader.load_axioms(&triples)?;
        debug!("Loaded {} supplementary axioms from {} triples", axioms.len(), triples.len());
        Ok(Self { axioms })
    }

    /// An empty bundle
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn axioms(&self) -> &AxiomSet {
        &self.axioms
    }
}
