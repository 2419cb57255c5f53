//! Generator configuration

use dictowl_core::OwlIri;
use serde::{Deserialize, Serialize};

pub const DEFAULT_NAMESPACE: &str = "https://bmir-radx.github.io/";
pub const DEFAULT_NCIT_BASE: &str = "http://ncicb.nci.nih.gov/xml/owl/EVS/Thesaurus.owl#";
pub const DEFAULT_OBO_BASE: &str = "http://purl.obolibrary.org/obo/";

/// Namespaces used when minting and resolving class IRIs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Namespace for record, section, choice and root classes
    pub namespace: String,

    /// Base IRI for `NCIT:` identifiers
    pub ncit_base: String,

    /// Base IRI for other `PREFIX:LOCAL` identifiers
    pub obo_base: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            ncit_base: DEFAULT_NCIT_BASE.to_string(),
            obo_base: DEFAULT_OBO_BASE.to_string(),
        }
    }
}

impl GeneratorConfig {
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// IRI of `local` in the generator namespace
    pub fn iri(&self, local: &str) -> OwlIri {
        OwlIri::new(format!("{}{}", self.namespace, local))
    }
}
