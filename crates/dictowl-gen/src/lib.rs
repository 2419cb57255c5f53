//! # dictowl generator
//!
//! Turns data-dictionary records into OWL axioms:
//! - one class per record, placed under its section or the `DataElement` root
//! - value classes for enumerated fields
//! - existential `isAssociatedWith` restrictions to referenced vocabulary
//!   terms, together with each term's ancestor closure
//!
//! ```no_run
//! use dictowl_gen::{generate, DataDictionaryRecord, Choice};
//! use dictowl_store::TermStore;
//!
//! let store = TermStore::default();
//! let records = vec![
//!     DataDictionaryRecord::new("AGE")
//!         .with_label("Age")
//!         .with_section("Demographics")
//!         .with_choice(Choice::new("1", "Child"))
//!         .with_term("HP:0000118"),
//! ];
//! let axioms = generate(&records, &store)?;
//! println!("{} axioms", axioms.len());
//! # Ok::<(), dictowl_gen::GenerateError>(())
//! ```

pub mod config;
pub mod record;
pub mod resolver;
pub mod generator;

pub use config::GeneratorConfig;
pub use record::{Choice, DataDictionaryRecord, TermReference};
pub use resolver::{IdentifierKind, IdentifierResolver};
pub use generator::AxiomGenerator;

use dictowl_core::{AxiomSet, BundleError};
use dictowl_store::TermLookup;
use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    /// A choice value that is not a 32-bit signed integer
    #[error("Record '{record}' has non-integer enumeration value '{value}': {source}")]
    InvalidChoiceValue {
        record: String,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Failed to load supplementary axioms: {0}")]
    Bundle(#[from] BundleError),
}

/// Generate the axiom set for `records` with the default configuration
pub fn generate(
    records: &[DataDictionaryRecord],
    terms: &dyn TermLookup,
) -> Result<AxiomSet, GenerateError> {
    AxiomGenerator::new(GeneratorConfig::default(), terms)?.generate(records)
}
