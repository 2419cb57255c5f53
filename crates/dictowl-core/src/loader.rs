//! トリプルから OWL 公理への変換

use crate::model::{AnnotationValue, Axiom, AxiomSet, ClassExpression, Entity, Literal, OwlIri};
use crate::vocabulary;
use crate::BundleError;
use serde::{Deserialize, Serialize};

/// Object position of a triple
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Object {
    Iri(String),
    Literal(Literal),
}

/// RDF triple with a typed object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triple {
    pub subject: String,
    pub predicate: String,
    pub object: Object,
}

/// Axiom loader trait
pub trait AxiomLoader {
    fn load_axioms(&self, triples: &[Triple]) -> Result<AxiomSet, BundleError>;
}

/// Maps the triple vocabulary used by the supplementary bundle onto axioms:
/// typed entities become declarations, `rdfs:subClassOf` becomes a named
/// subclass axiom and every other predicate becomes an annotation assertion.
pub struct DefaultAxiomLoader;

impl AxiomLoader for DefaultAxiomLoader {
    fn load_axioms(&self, triples: &[Triple]) -> Result<AxiomSet, BundleError> {
        let mut axioms = AxiomSet::new();

        for triple in triples {
            let subject = OwlIri::new(triple.subject.clone());

            if triple.predicate == vocabulary::RDF_TYPE {
                let entity = match &triple.object {
                    Object::Iri(t) if t == vocabulary::OWL_CLASS => Entity::Class(subject),
                    Object::Iri(t) if t == vocabulary::OWL_OBJECT_PROPERTY => Entity::ObjectProperty(subject),
                    Object::Iri(t) if t == vocabulary::OWL_ANNOTATION_PROPERTY => {
                        Entity::AnnotationProperty(subject)
                    }
                    other => {
                        return Err(BundleError::UnsupportedStatement(format!(
                            "{} rdf:type {:?}",
                            triple.subject, other
                        )))
                    }
                };
                axioms.insert(Axiom::Declaration(entity));
            } else if triple.predicate == vocabulary::RDFS_SUBCLASS_OF {
                match &triple.object {
                    Object::Iri(sup) => {
                        axioms.insert(Axiom::SubClassOf(
                            ClassExpression::Named(subject),
                            ClassExpression::named(sup.as_str()),
                        ));
                    }
                    Object::Literal(literal) => {
                        return Err(BundleError::UnsupportedStatement(format!(
                            "{} rdfs:subClassOf literal {}",
                            triple.subject, literal
                        )))
                    }
                }
            } else {
                let value: AnnotationValue = match &triple.object {
                    Object::Iri(iri) => OwlIri::new(iri.clone()).into(),
                    Object::Literal(literal) => literal.clone().into(),
                };
                axioms.insert(Axiom::annotation(
                    OwlIri::new(triple.predicate.clone()),
                    subject,
                    value,
                ));
            }
        }

        Ok(axioms)
    }
}
