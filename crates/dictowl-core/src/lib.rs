//! # dictowl core
//!
//! OWL 公理のデータモデルと語彙
//! - 宣言・サブクラス・注釈・存在制限の公理
//! - 集合意味論の `AxiomSet`
//! - 全出力に併合される補助公理バンドル

pub mod model;
pub mod vocabulary;
pub mod loader;
pub mod bundle;

pub use model::{
    AnnotationValue, Axiom, AxiomKind, AxiomSet, ClassExpression, Entity, Literal, OwlIri,
};
pub use loader::{AxiomLoader, DefaultAxiomLoader, Object, Triple};
pub use bundle::{BundleDocument, SupplementaryBundle};

use thiserror::Error;

/// Errors raised while loading the supplementary axiom bundle
#[derive(Error, Debug)]
pub enum BundleError {
    #[error("Bundle is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed bundle document: {0}")]
    Malformed(String),

    #[error("Unsupported statement in bundle: {0}")]
    UnsupportedStatement(String),
}
