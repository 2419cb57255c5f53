//! Axiom generation for data-dictionary records

use crate::config::GeneratorConfig;
use crate::record::{DataDictionaryRecord, TermReference};
use crate::resolver::IdentifierResolver;
use crate::GenerateError;
use dictowl_core::vocabulary;
use dictowl_core::{
    AnnotationValue, Axiom, AxiomSet, ClassExpression, Entity, OwlIri, SupplementaryBundle,
};
use dictowl_store::TermLookup;
use std::collections::HashSet;
use tracing::{debug, info, trace};

/// Root class of every record class
pub const DATA_ELEMENT: &str = "DataElement";
/// Root class of section classes
pub const DATA_ELEMENT_SECTION: &str = "DataElementSection";
/// Root class of per-record value classes
pub const DATA_ELEMENT_VALUE: &str = "DataElementValue";
/// Fallback superclass of external terms without known parents
pub const OTHER_THING: &str = "OtherThing";
pub const IS_ASSOCIATED_WITH: &str = "isAssociatedWith";
pub const IS_IN_SECTION: &str = "isInSection";

const SECTION_SUFFIX: &str = "DataElement";

/// Builds the axioms describing data-dictionary records and the external
/// vocabulary terms they reference.
pub struct AxiomGenerator<'a> {
    config: GeneratorConfig,
    resolver: IdentifierResolver,
    terms: &'a dyn TermLookup,
    bundle: SupplementaryBundle,
}

impl<'a> AxiomGenerator<'a> {
    /// Create a generator that merges the shipped supplementary bundle
    pub fn new(config: GeneratorConfig, terms: &'a dyn TermLookup) -> Result<Self, GenerateError> {
        let bundle = SupplementaryBundle::load()?;
        Ok(Self::with_bundle(config, terms, bundle))
    }

    pub fn with_bundle(
        config: GeneratorConfig,
        terms: &'a dyn TermLookup,
        bundle: SupplementaryBundle,
    ) -> Self {
        let resolver = IdentifierResolver::new(&config);
        Self {
            config,
            resolver,
            terms,
            bundle,
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn resolver(&self) -> &IdentifierResolver {
        &self.resolver
    }

    /// Generate the axioms for a whole dictionary, including the
    /// supplementary bundle. Fails on the first invalid enumeration value.
    pub fn generate(&self, records: &[DataDictionaryRecord]) -> Result<AxiomSet, GenerateError> {
        info!("Generating axioms for {} data dictionary records", records.len());

        let mut axioms = AxiomSet::new();
        for record in records {
            self.generate_record(record, &mut axioms)?;
        }
        axioms.extend(self.bundle.axioms().iter().cloned());

        info!("Generated {} axioms", axioms.len());
        Ok(axioms)
    }

    /// Add the axioms for one record to `axioms`
    pub fn generate_record(
        &self,
        record: &DataDictionaryRecord,
        axioms: &mut AxiomSet,
    ) -> Result<(), GenerateError> {
        debug!("Processing data dictionary record {}", record.id);

        let iri = self.config.iri(&record.id);
        axioms.insert(Axiom::declare_class(iri.clone()));
        axioms.insert(Axiom::annotation(
            vocabulary::schema_identifier(),
            iri.clone(),
            AnnotationValue::string(record.id.as_str()),
        ));

        self.add_section_axioms(record, &iri, axioms);
        self.add_label_axioms(record, &iri, axioms);
        self.add_description_axioms(record, &iri, axioms);
        self.add_enumeration_axioms(record, &iri, axioms)?;
        self.add_see_also_axioms(record, &iri, axioms);
        self.add_associated_with_axioms(record, &iri, axioms);

        Ok(())
    }

    /// Name of the section class for a section title. Words are split on
    /// whitespace only and title-cased, so `"sample collection"` becomes
    /// `SampleCollectionDataElement` and `"COVID-19 Testing"` becomes
    /// `Covid-19TestingDataElement`.
    pub fn section_class_name(section: &str) -> String {
        let mut name: String = section.split_whitespace().map(title_case).collect();
        name.push_str(SECTION_SUFFIX);
        name
    }

    /// Sectioned records hang under their section class rather than directly
    /// under `DataElement`, keeping one named parent per record class.
    fn add_section_axioms(&self, record: &DataDictionaryRecord, iri: &OwlIri, axioms: &mut AxiomSet) {
        let root = self.config.iri(DATA_ELEMENT);
        axioms.insert(Axiom::declare_class(root.clone()));

        if record.section.is_empty() {
            axioms.insert(Axiom::sub_class_of(iri.clone(), root));
            return;
        }

        let section_iri = self.config.iri(&Self::section_class_name(&record.section));
        let section_root = self.config.iri(DATA_ELEMENT_SECTION);
        let is_in_section = self.config.iri(IS_IN_SECTION);

        axioms.insert(Axiom::declare_class(section_root.clone()));
        axioms.insert(Axiom::declare_class(section_iri.clone()));
        axioms.insert(Axiom::sub_class_of(section_iri.clone(), section_root));
        axioms.insert(Axiom::sub_class_of(iri.clone(), section_iri.clone()));
        axioms.insert(Axiom::annotation(
            vocabulary::rdfs_label(),
            section_iri.clone(),
            AnnotationValue::string(format!("{} Section", record.section)),
        ));
        axioms.insert(Axiom::Declaration(Entity::AnnotationProperty(is_in_section.clone())));
        axioms.insert(Axiom::annotation(is_in_section, iri.clone(), section_iri.clone()));
        axioms.insert(Axiom::annotation(vocabulary::rdfs_see_also(), section_iri, iri.clone()));
    }

    fn add_label_axioms(&self, record: &DataDictionaryRecord, iri: &OwlIri, axioms: &mut AxiomSet) {
        if record.label.is_empty() {
            return;
        }
        axioms.insert(Axiom::annotation(
            vocabulary::rdfs_label(),
            iri.clone(),
            AnnotationValue::string(format!("{} Data Element", record.id)),
        ));
        axioms.insert(Axiom::annotation(
            vocabulary::schema_text(),
            iri.clone(),
            AnnotationValue::string(record.label.as_str()),
        ));
    }

    fn add_description_axioms(&self, record: &DataDictionaryRecord, iri: &OwlIri, axioms: &mut AxiomSet) {
        if record.description.is_empty() {
            return;
        }
        axioms.insert(Axiom::annotation(
            vocabulary::skos_definition(),
            iri.clone(),
            AnnotationValue::string(record.description.as_str()),
        ));
    }

    fn add_enumeration_axioms(
        &self,
        record: &DataDictionaryRecord,
        iri: &OwlIri,
        axioms: &mut AxiomSet,
    ) -> Result<(), GenerateError> {
        let choices = match &record.enumeration {
            Some(choices) => choices,
            None => return Ok(()),
        };

        let id = &record.id;
        let value_root = self.config.iri(DATA_ELEMENT_VALUE);

        for choice in choices {
            let numeric = choice
                .value
                .parse::<i32>()
                .map_err(|source| GenerateError::InvalidChoiceValue {
                    record: id.clone(),
                    value: choice.value.clone(),
                    source,
                })?;

            let choice_iri = self.config.iri(&format!("{}_{}", id, choice.value));
            axioms.insert(Axiom::declare_class(choice_iri.clone()));
            axioms.insert(Axiom::annotation(
                vocabulary::schema_text(),
                choice_iri.clone(),
                AnnotationValue::string(choice.label.as_str()),
            ));
            axioms.insert(Axiom::annotation(
                vocabulary::rdfs_label(),
                choice_iri.clone(),
                AnnotationValue::string(format!("{} Value, {} ({})", id, choice.value, choice.label)),
            ));
            axioms.insert(Axiom::annotation(
                vocabulary::schema_value(),
                choice_iri.clone(),
                AnnotationValue::integer(i64::from(numeric)),
            ));
            axioms.insert(Axiom::annotation(vocabulary::rdfs_see_also(), choice_iri.clone(), iri.clone()));
            axioms.insert(Axiom::annotation(vocabulary::rdfs_see_also(), iri.clone(), choice_iri.clone()));

            let record_value_root = self.config.iri(&format!("{}_value", id));
            axioms.insert(Axiom::declare_class(record_value_root.clone()));
            axioms.insert(Axiom::sub_class_of(choice_iri, record_value_root.clone()));
            axioms.insert(Axiom::annotation(
                vocabulary::rdfs_label(),
                record_value_root.clone(),
                AnnotationValue::string(format!("{} value", id)),
            ));
            axioms.insert(Axiom::annotation(
                vocabulary::rdfs_see_also(),
                record_value_root.clone(),
                iri.clone(),
            ));

            axioms.insert(Axiom::declare_class(value_root.clone()));
            axioms.insert(Axiom::sub_class_of(record_value_root, value_root.clone()));
        }

        Ok(())
    }

    fn add_see_also_axioms(&self, record: &DataDictionaryRecord, iri: &OwlIri, axioms: &mut AxiomSet) {
        if let Some(see_also) = &record.see_also {
            axioms.insert(Axiom::annotation(
                vocabulary::rdfs_see_also(),
                iri.clone(),
                OwlIri::new(see_also.as_str()),
            ));
        }
    }

    fn add_associated_with_axioms(&self, record: &DataDictionaryRecord, iri: &OwlIri, axioms: &mut AxiomSet) {
        let property = self.config.iri(IS_ASSOCIATED_WITH);
        let contexts = [iri.clone()];

        for term in record.terms.iter().filter(|t| !t.is_empty()) {
            let term_iri = self.expand_term(term, &contexts, axioms);
            axioms.insert(Axiom::Declaration(Entity::ObjectProperty(property.clone())));
            axioms.insert(Axiom::SubClassOf(
                ClassExpression::Named(iri.clone()),
                ClassExpression::some_values_from(property.clone(), ClassExpression::Named(term_iri)),
            ));
        }
    }

    /// Resolve `reference` and add its class, annotations and ancestor
    /// closure to `axioms`. `contexts` are the classes that reference the
    /// term directly. Returns the term class IRI.
    pub fn expand_term(
        &self,
        reference: &TermReference,
        contexts: &[OwlIri],
        axioms: &mut AxiomSet,
    ) -> OwlIri {
        let term = self.resolver.resolve(reference);
        let mut visited = HashSet::new();
        self.expand_resolved(&term, contexts, 0, &mut visited, axioms);
        term
    }

    fn expand_resolved(
        &self,
        term: &OwlIri,
        contexts: &[OwlIri],
        depth: usize,
        visited: &mut HashSet<OwlIri>,
        axioms: &mut AxiomSet,
    ) {
        let first_visit = visited.insert(term.clone());
        let key = term.as_str();

        axioms.insert(Axiom::declare_class(term.clone()));
        for context in contexts {
            if depth == 0 {
                axioms.insert(Axiom::annotation(vocabulary::rdfs_see_also(), context.clone(), term.clone()));
            }
            axioms.insert(Axiom::annotation(vocabulary::rdfs_see_also(), term.clone(), context.clone()));
        }

        if let Some(label) = self.terms.label(key) {
            axioms.insert(Axiom::annotation(
                vocabulary::rdfs_label(),
                term.clone(),
                AnnotationValue::string(label),
            ));
        }

        for synonym in self.terms.synonyms(key) {
            if depth == 0 {
                for context in contexts {
                    axioms.insert(Axiom::annotation(
                        vocabulary::skos_alt_label(),
                        context.clone(),
                        AnnotationValue::string(synonym.as_str()),
                    ));
                }
            }
            axioms.insert(Axiom::annotation(
                vocabulary::skos_alt_label(),
                term.clone(),
                AnnotationValue::string(synonym.as_str()),
            ));
        }

        for definition in self.terms.definitions(key) {
            axioms.insert(Axiom::annotation(
                vocabulary::skos_definition(),
                term.clone(),
                AnnotationValue::string(definition.as_str()),
            ));
        }

        let parents: Vec<OwlIri> = self
            .terms
            .parents(key)
            .iter()
            .map(|parent| self.resolver.resolve_str(parent))
            .filter(|parent| parent.as_str() != vocabulary::OWL_THING)
            .collect();

        if parents.is_empty() {
            let other = self.config.iri(OTHER_THING);
            axioms.insert(Axiom::declare_class(other.clone()));
            axioms.insert(Axiom::sub_class_of(term.clone(), other));
            return;
        }

        for parent in parents {
            axioms.insert(Axiom::declare_class(parent.clone()));
            axioms.insert(Axiom::sub_class_of(term.clone(), parent.clone()));
            if first_visit {
                self.expand_resolved(&parent, contexts, depth + 1, visited, axioms);
            } else {
                trace!("Already expanded {}, not descending to {}", term, parent);
            }
        }
    }
}

fn title_case(word: &str) -> String {
    let lower = word.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
