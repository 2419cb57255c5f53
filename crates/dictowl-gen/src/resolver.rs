//! Term identifier resolution
//!
//! Identifiers are classified once into an [`IdentifierKind`] and the kind
//! decides how the canonical IRI is built:
//!
//! | kind           | input              | output                       |
//! |----------------|--------------------|------------------------------|
//! | `Uri`          | `http(s)://...`    | unchanged                    |
//! | `Ncit`         | `NCIT:C100`        | NCIT base + `C100`           |
//! | `Obo`          | `HP:0000118`       | OBO base + `HP_0000118`      |
//! | `Unrecognized` | anything else      | unchanged, with a warning    |

use crate::config::GeneratorConfig;
use crate::record::TermReference;
use dictowl_core::OwlIri;
use dictowl_store::TermStoreBuilder;
use tracing::warn;

const WEB_SCHEMES: [&str; 2] = ["http://", "https://"];
const NCIT_PREFIX: &str = "NCIT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind<'a> {
    Uri,
    Ncit { local: &'a str },
    Obo { prefix: &'a str, local: &'a str },
    Unrecognized,
}

impl<'a> IdentifierKind<'a> {
    pub fn classify(identifier: &'a str) -> Self {
        if WEB_SCHEMES.iter().any(|scheme| identifier.starts_with(scheme)) {
            return IdentifierKind::Uri;
        }
        match identifier.split_once(':') {
            Some((NCIT_PREFIX, local)) => IdentifierKind::Ncit { local },
            Some((prefix, local)) => IdentifierKind::Obo { prefix, local },
            None => IdentifierKind::Unrecognized,
        }
    }
}

/// Maps term identifiers to canonical class IRIs
#[derive(Debug, Clone)]
pub struct IdentifierResolver {
    ncit_base: String,
    obo_base: String,
}

impl IdentifierResolver {
    pub fn new(config: &GeneratorConfig) -> Self {
        Self {
            ncit_base: config.ncit_base.clone(),
            obo_base: config.obo_base.clone(),
        }
    }

    pub fn resolve(&self, reference: &TermReference) -> OwlIri {
        self.resolve_str(reference.identifier())
    }

    pub fn resolve_str(&self, identifier: &str) -> OwlIri {
        match IdentifierKind::classify(identifier) {
            IdentifierKind::Uri => OwlIri::new(identifier),
            IdentifierKind::Ncit { local } => OwlIri::new(format!("{}{}", self.ncit_base, local)),
            IdentifierKind::Obo { prefix, local } => {
                OwlIri::new(format!("{}{}_{}", self.obo_base, prefix, local))
            }
            IdentifierKind::Unrecognized => {
                warn!("Cannot resolve term identifier '{}', using it as-is", identifier);
                OwlIri::new(identifier)
            }
        }
    }

    /// A term store builder whose row keys are canonicalised by this
    /// resolver. Unrecognized ids are stored as written.
    pub fn store_builder(&self) -> TermStoreBuilder {
        let resolver = self.clone();
        TermStoreBuilder::new().with_key_normalizer(move |id| match IdentifierKind::classify(id) {
            IdentifierKind::Unrecognized => id.to_string(),
            _ => resolver.resolve_str(id).to_string(),
        })
    }
}

impl Default for IdentifierResolver {
    fn default() -> Self {
        Self::new(&GeneratorConfig::default())
    }
}
