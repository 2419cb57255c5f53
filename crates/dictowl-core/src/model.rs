//! OWL 公理データモデル

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// OWL IRI wrapper for type safety
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwlIri(pub String);

impl OwlIri {
    pub fn new<S: Into<String>>(s: S) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OwlIri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for OwlIri {
    fn from(s: &str) -> Self {
        OwlIri::new(s)
    }
}

impl From<String> for OwlIri {
    fn from(s: String) -> Self {
        OwlIri(s)
    }
}

/// Declarable OWL entity
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Entity {
    Class(OwlIri),
    ObjectProperty(OwlIri),
    AnnotationProperty(OwlIri),
}

impl Entity {
    pub fn iri(&self) -> &OwlIri {
        match self {
            Entity::Class(iri) | Entity::ObjectProperty(iri) | Entity::AnnotationProperty(iri) => iri,
        }
    }
}

/// OWL class expression (the subset the generator emits)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum ClassExpression {
    /// Named class
    Named(OwlIri),

    /// Existential restriction: ∃R.C
    SomeValuesFrom {
        property: OwlIri,
        class: Box<ClassExpression>,
    },
}

impl ClassExpression {
    pub fn named<I: Into<OwlIri>>(iri: I) -> Self {
        ClassExpression::Named(iri.into())
    }

    pub fn some_values_from(property: OwlIri, class: ClassExpression) -> Self {
        ClassExpression::SomeValuesFrom {
            property,
            class: Box::new(class),
        }
    }

    /// IRI of a named class, `None` for restrictions
    pub fn as_named(&self) -> Option<&OwlIri> {
        match self {
            ClassExpression::Named(iri) => Some(iri),
            ClassExpression::SomeValuesFrom { .. } => None,
        }
    }
}

/// Annotation literal
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Literal {
    /// Plain string literal
    String(String),
    /// xsd:integer literal
    Integer(i64),
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::String(s) => write!(f, "\"{}\"", s),
            Literal::Integer(n) => write!(f, "\"{}\"^^xsd:integer", n),
        }
    }
}

/// Object of an annotation assertion
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum AnnotationValue {
    Iri(OwlIri),
    Literal(Literal),
}

impl AnnotationValue {
    pub fn string<S: Into<String>>(s: S) -> Self {
        AnnotationValue::Literal(Literal::String(s.into()))
    }

    pub fn integer(n: i64) -> Self {
        AnnotationValue::Literal(Literal::Integer(n))
    }
}

impl From<OwlIri> for AnnotationValue {
    fn from(iri: OwlIri) -> Self {
        AnnotationValue::Iri(iri)
    }
}

impl From<Literal> for AnnotationValue {
    fn from(literal: Literal) -> Self {
        AnnotationValue::Literal(literal)
    }
}

/// OWL axiom
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Axiom {
    /// Declaration(E)
    Declaration(Entity),

    /// SubClassOf(C1 C2)
    SubClassOf(ClassExpression, ClassExpression),

    /// AnnotationAssertion(P s v)
    AnnotationAssertion {
        property: OwlIri,
        subject: OwlIri,
        value: AnnotationValue,
    },
}

impl Axiom {
    pub fn declare_class<I: Into<OwlIri>>(iri: I) -> Self {
        Axiom::Declaration(Entity::Class(iri.into()))
    }

    /// SubClassOf between two named classes
    pub fn sub_class_of<A: Into<OwlIri>, B: Into<OwlIri>>(sub: A, sup: B) -> Self {
        Axiom::SubClassOf(ClassExpression::named(sub), ClassExpression::named(sup))
    }

    pub fn annotation<V: Into<AnnotationValue>>(property: OwlIri, subject: OwlIri, value: V) -> Self {
        Axiom::AnnotationAssertion {
            property,
            subject,
            value: value.into(),
        }
    }

    pub fn kind(&self) -> AxiomKind {
        match self {
            Axiom::Declaration(_) => AxiomKind::Declaration,
            Axiom::SubClassOf(_, ClassExpression::SomeValuesFrom { .. }) => AxiomKind::Restriction,
            Axiom::SubClassOf(_, _) => AxiomKind::SubClassOf,
            Axiom::AnnotationAssertion { .. } => AxiomKind::AnnotationAssertion,
        }
    }
}

/// Coarse axiom category used for statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum AxiomKind {
    Declaration,
    SubClassOf,
    Restriction,
    AnnotationAssertion,
}

impl std::fmt::Display for AxiomKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AxiomKind::Declaration => "Declaration",
            AxiomKind::SubClassOf => "SubClassOf",
            AxiomKind::Restriction => "SubClassOf(ObjectSomeValuesFrom)",
            AxiomKind::AnnotationAssertion => "AnnotationAssertion",
        };
        f.write_str(name)
    }
}

/// Set of axioms with deterministic iteration order.
///
/// Inserting an axiom that is already present is a no-op, so facts that are
/// derived more than once collapse to a single statement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AxiomSet {
    axioms: BTreeSet<Axiom>,
}

impl AxiomSet {
    pub fn new() -> Self {
        Self {
            axioms: BTreeSet::new(),
        }
    }

    /// Returns `true` if the axiom was not present before
    pub fn insert(&mut self, axiom: Axiom) -> bool {
        self.axioms.insert(axiom)
    }

    /// Move every axiom of `other` into this set
    pub fn merge(&mut self, other: AxiomSet) {
        self.axioms.extend(other.axioms);
    }

    pub fn contains(&self, axiom: &Axiom) -> bool {
        self.axioms.contains(axiom)
    }

    pub fn len(&self) -> usize {
        self.axioms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.axioms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Axiom> {
        self.axioms.iter()
    }

    /// Classes that have a declaration axiom
    pub fn declared_classes(&self) -> BTreeSet<&OwlIri> {
        self.axioms
            .iter()
            .filter_map(|axiom| match axiom {
                Axiom::Declaration(Entity::Class(iri)) => Some(iri),
                _ => None,
            })
            .collect()
    }

    /// Superclass expressions asserted for the named class `iri`
    pub fn direct_superclasses(&self, iri: &OwlIri) -> Vec<&ClassExpression> {
        self.axioms
            .iter()
            .filter_map(|axiom| match axiom {
                Axiom::SubClassOf(ClassExpression::Named(sub), sup) if sub == iri => Some(sup),
                _ => None,
            })
            .collect()
    }

    /// Values of the annotation `property` asserted on `subject`
    pub fn annotations(&self, subject: &OwlIri, property: &str) -> Vec<&AnnotationValue> {
        self.axioms
            .iter()
            .filter_map(|axiom| match axiom {
                Axiom::AnnotationAssertion { property: p, subject: s, value }
                    if s == subject && p.as_str() == property =>
                {
                    Some(value)
                }
                _ => None,
            })
            .collect()
    }

    pub fn count_by_kind(&self) -> BTreeMap<AxiomKind, usize> {
        let mut counts = BTreeMap::new();
        for axiom in &self.axioms {
            *counts.entry(axiom.kind()).or_insert(0) += 1;
        }
        counts
    }
}

impl Extend<Axiom> for AxiomSet {
    fn extend<T: IntoIterator<Item = Axiom>>(&mut self, iter: T) {
        self.axioms.extend(iter);
    }
}

impl FromIterator<Axiom> for AxiomSet {
    fn from_iter<T: IntoIterator<Item = Axiom>>(iter: T) -> Self {
        Self {
            axioms: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for AxiomSet {
    type Item = Axiom;
    type IntoIter = std::collections::btree_set::IntoIter<Axiom>;

    fn into_iter(self) -> Self::IntoIter {
        self.axioms.into_iter()
    }
}

impl<'a> IntoIterator for &'a AxiomSet {
    type Item = &'a Axiom;
    type IntoIter = std::collections::btree_set::Iter<'a, Axiom>;

    fn into_iter(self) -> Self::IntoIter {
        self.axioms.iter()
    }
}
