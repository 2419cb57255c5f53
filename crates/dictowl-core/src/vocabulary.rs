//! Well-known vocabulary IRIs

use crate::model::OwlIri;

pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
pub const RDFS_SEE_ALSO: &str = "http://www.w3.org/2000/01/rdf-schema#seeAlso";
pub const RDFS_SUBCLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";

pub const OWL_CLASS: &str = "http://www.w3.org/2002/07/owl#Class";
pub const OWL_THING: &str = "http://www.w3.org/2002/07/owl#Thing";
pub const OWL_OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#ObjectProperty";
pub const OWL_ANNOTATION_PROPERTY: &str = "http://www.w3.org/2002/07/owl#AnnotationProperty";

pub const SKOS_DEFINITION: &str = "http://www.w3.org/2004/02/skos/core#definition";
pub const SKOS_ALT_LABEL: &str = "http://www.w3.org/2004/02/skos/core#altLabel";

pub const SCHEMA_IDENTIFIER: &str = "https://schema.org/identifier";
pub const SCHEMA_TEXT: &str = "https://schema.org/text";
pub const SCHEMA_VALUE: &str = "https://schema.org/value";

pub fn rdfs_label() -> OwlIri { OwlIri::new(RDFS_LABEL) }
pub fn rdfs_see_also() -> OwlIri { OwlIri::new(RDFS_SEE_ALSO) }
pub fn skos_definition() -> OwlIri { OwlIri::new(SKOS_DEFINITION) }
pub fn skos_alt_label() -> OwlIri { OwlIri::new(SKOS_ALT_LABEL) }
pub fn schema_identifier() -> OwlIri { OwlIri::new(SCHEMA_IDENTIFIER) }
pub fn schema_text() -> OwlIri { OwlIri::new(SCHEMA_TEXT) }
pub fn schema_value() -> OwlIri { OwlIri::new(SCHEMA_VALUE) }
