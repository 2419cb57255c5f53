use dictowl_store::*;
use flate2::write::GzEncoder;
use flate2::Compression;
use proptest::prelude::*;
use std::io::Write;

const HP_TABLE: &str = "\
Class ID,Preferred Label,Synonyms,Parents,definition
http://purl.obolibrary.org/obo/HP_0000118,Phenotypic abnormality,Organ abnormality | ,http://purl.obolibrary.org/obo/HP_0000001,A phenotypic abnormality.
http://purl.obolibrary.org/obo/HP_0000001,All,,http://www.w3.org/2002/07/owl#Thing,
";

fn gzip(data: &str) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data.as_bytes()).unwrap();
    encoder.finish().unwrap()
}

#[test]
fn test_load_gzip_table() {
    let mut builder = TermStore::builder();
    let count = builder.load_gzip(gzip(HP_TABLE).as_slice()).unwrap();
    assert_eq!(count, 2);

    let store = builder.build();
    let hp = "http://purl.obolibrary.org/obo/HP_0000118";

    assert_eq!(store.label(hp), Some("Phenotypic abnormality"));
    assert_eq!(store.synonyms(hp), ["Organ abnormality".to_string()]);
    assert_eq!(store.definitions(hp), ["A phenotypic abnormality.".to_string()]);
    assert_eq!(store.parents(hp), ["http://purl.obolibrary.org/obo/HP_0000001".to_string()]);
    assert_eq!(store.len(), 2);
}

#[test]
fn test_unknown_term_is_empty() {
    let store = TermStore::default();
    assert_eq!(store.label("http://example.org/missing"), None);
    assert!(store.synonyms("http://example.org/missing").is_empty());
    assert!(store.definitions("http://example.org/missing").is_empty());
    assert!(store.parents("http://example.org/missing").is_empty());
    assert!(!store.contains("http://example.org/missing"));
    assert!(store.is_empty());
}

#[test]
fn test_empty_definition_cell_is_absent() {
    let mut builder = TermStore::builder();
    builder.load_csv(HP_TABLE.as_bytes()).unwrap();
    let store = builder.build();

    assert!(store.definitions("http://purl.obolibrary.org/obo/HP_0000001").is_empty());
    assert!(store.synonyms("http://purl.obolibrary.org/obo/HP_0000001").is_empty());
}

#[test]
fn test_later_source_overwrites_present_columns() {
    let mut builder = TermStore::builder();
    builder.load_csv(HP_TABLE.as_bytes()).unwrap();
    builder
        .load_csv(
            "Class ID,Preferred Label,Synonyms,Parents,definition\n\
             http://purl.obolibrary.org/obo/HP_0000118,Abnormal phenotype,,,\n"
                .as_bytes(),
        )
        .unwrap();
    let store = builder.build();
    let hp = "http://purl.obolibrary.org/obo/HP_0000118";

    assert_eq!(store.label(hp), Some("Abnormal phenotype"));
    assert!(store.synonyms(hp).is_empty());
    assert!(store.parents(hp).is_empty());
    assert!(store.definitions(hp).is_empty());
}

#[test]
fn test_absent_columns_leave_prior_values() {
    let mut builder = TermStore::builder();
    builder.load_csv(HP_TABLE.as_bytes()).unwrap();
    builder
        .load_csv(
            "Class ID,Preferred Label,Synonyms\n\
             http://purl.obolibrary.org/obo/HP_0000118,Abnormal phenotype,Abnormality\n"
                .as_bytes(),
        )
        .unwrap();
    let store = builder.build();
    let hp = "http://purl.obolibrary.org/obo/HP_0000118";

    assert_eq!(store.label(hp), Some("Abnormal phenotype"));
    assert_eq!(store.synonyms(hp), ["Abnormality".to_string()]);
    assert_eq!(store.parents(hp), ["http://purl.obolibrary.org/obo/HP_0000001".to_string()]);
    assert_eq!(store.definitions(hp), ["A phenotypic abnormality.".to_string()]);
}

#[test]
fn test_key_normalizer_rewrites_class_ids() {
    let mut builder = TermStore::builder().with_key_normalizer(|id| match id.split_once(':') {
        Some(("NCIT", local)) => format!("http://example.org/ncit#{}", local),
        _ => id.to_string(),
    });
    builder
        .load_csv(
            "Class ID,Preferred Label,Synonyms,Parents\n\
             NCIT:C1,Age,Years old,NCIT:C2\n\
             http://example.org/X,X,,\n"
                .as_bytes(),
        )
        .unwrap();
    let store = builder.build();

    assert_eq!(store.label("http://example.org/ncit#C1"), Some("Age"));
    assert!(!store.contains("NCIT:C1"));
    // parent cells are left for the caller to resolve
    assert_eq!(store.parents("http://example.org/ncit#C1"), ["NCIT:C2".to_string()]);
    assert_eq!(store.label("http://example.org/X"), Some("X"));
}

#[test]
fn test_prefixed_and_canonical_rows_merge_under_one_key() {
    let mut builder = TermStore::builder().with_key_normalizer(|id| id.replace("NCIT:", "http://example.org/ncit#"));
    builder
        .load_csv("Class ID,Preferred Label,Synonyms\nhttp://example.org/ncit#C1,Old,Old synonym\n".as_bytes())
        .unwrap();
    builder
        .load_csv("Class ID,Preferred Label,Synonyms\nNCIT:C1,New,\n".as_bytes())
        .unwrap();
    let store = builder.build();

    assert_eq!(store.len(), 1);
    assert_eq!(store.label("http://example.org/ncit#C1"), Some("New"));
    assert!(store.synonyms("http://example.org/ncit#C1").is_empty());
}

#[test]
fn test_quoted_cells() {
    let data = "Class ID,Preferred Label,Synonyms,Parents\n\
                \"NCIT:C1\",\"Label, with comma\",\"a|b\",\"NCIT:C2 | NCIT:C3\"\n";
    let mut builder = TermStore::builder();
    builder.load_csv(data.as_bytes()).unwrap();
    let store = builder.build();

    assert_eq!(store.label("NCIT:C1"), Some("Label, with comma"));
    assert_eq!(store.synonyms("NCIT:C1").len(), 2);
    assert_eq!(store.parents("NCIT:C1"), ["NCIT:C2".to_string(), "NCIT:C3".to_string()]);
}

#[test]
fn test_missing_required_column() {
    let mut builder = TermStore::builder();
    let result = builder.load_csv("Class ID,Synonyms\nhttp://x/A,\n".as_bytes());
    assert!(matches!(result, Err(StoreError::MissingColumn(columns::PREFERRED_LABEL))));
}

#[test]
fn test_corrupt_gzip_fails_without_partial_load() {
    let mut builder = TermStore::builder();
    builder.load_csv(HP_TABLE.as_bytes()).unwrap();

    let result = builder.load_gzip(&b"definitely not gzip"[..]);
    assert!(result.is_err());

    let store = builder.build();
    assert_eq!(store.len(), 2);
}

#[test]
fn test_load_path_detects_gzip() {
    let dir = tempfile::tempdir().unwrap();
    let gz_path = dir.path().join("HP.csv.gz");
    std::fs::write(&gz_path, gzip(HP_TABLE)).unwrap();
    let csv_path = dir.path().join("extra.csv");
    std::fs::write(
        &csv_path,
        "Class ID,Preferred Label,Synonyms\nhttp://example.org/X,X,\n",
    )
    .unwrap();

    let mut builder = TermStore::builder();
    assert_eq!(builder.load_path(&gz_path).unwrap(), 2);
    assert_eq!(builder.load_path(&csv_path).unwrap(), 1);
    let store = builder.build();
    assert_eq!(store.len(), 3);
    assert_eq!(store.label("http://example.org/X"), Some("X"));
}

#[test]
fn test_load_path_missing_file() {
    let mut builder = TermStore::builder();
    let result = builder.load_path("/nonexistent/terms.csv.gz");
    assert!(matches!(result, Err(StoreError::Open { .. })));
}

proptest! {
    #[test]
    fn prop_split_list_elements_are_trimmed_and_non_empty(cell in "[a-z |]{0,40}") {
        for element in split_list(&cell) {
            prop_assert!(!element.is_empty());
            prop_assert_eq!(element.trim(), element.as_str());
            prop_assert!(!element.contains('|'));
        }
    }
}
