// Integration tests for dictowl components
// Term tables on disk -> term store -> axiom generation

use dictowl_core::vocabulary;
use dictowl_core::{AnnotationValue, Axiom, AxiomKind, AxiomSet, OwlIri};
use dictowl_gen::{generate, Choice, DataDictionaryRecord};
use dictowl_store::TermStore;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

const NCIT: &str = "http://ncicb.nci.nih.gov/xml/owl/EVS/Thesaurus.owl#";
const OBO: &str = "http://purl.obolibrary.org/obo/";
const NS: &str = "https://bmir-radx.github.io/";

fn write_gzip(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    let file = std::fs::File::create(&path).unwrap();
    let mut encoder = GzEncoder::new(file, Compression::default());
    encoder.write_all(content.as_bytes()).unwrap();
    encoder.finish().unwrap();
    path
}

fn load_tables(dir: &TempDir) -> TermStore {
    let ncit = write_gzip(
        dir,
        "ncit.csv.gz",
        &format!(
            "Class ID,Preferred Label,Synonyms,Parents,definition\n\
             {ncit}C25150,Age,Age of subject|Subject age,{ncit}C25337,Length of life.\n\
             {ncit}C25337,Number,,,A numeric value.\n",
            ncit = NCIT
        ),
    );
    let hp = dir.path().join("hp.csv");
    std::fs::write(
        &hp,
        format!(
            "Class ID,Preferred Label,Synonyms,Parents\n\
             {obo}HP_0000118,Phenotypic abnormality,Organ abnormality,HP:0000001\n\
             {obo}HP_0000001,All,,http://www.w3.org/2002/07/owl#Thing\n",
            obo = OBO
        ),
    )
    .unwrap();

    let mut builder = TermStore::builder();
    assert_eq!(builder.load_path(&ncit).unwrap(), 2);
    assert_eq!(builder.load_path(&hp).unwrap(), 2);
    builder.build()
}

fn dictionary() -> Vec<DataDictionaryRecord> {
    vec![
        DataDictionaryRecord::new("AGE")
            .with_label("Age")
            .with_section("Demographics")
            .with_choice(Choice::new("1", "Child"))
            .with_choice(Choice::new("2", "Adult"))
            .with_term("NCIT:C25150")
            .with_term("HP:0000118"),
        DataDictionaryRecord::new("SEX")
            .with_label("Sex at birth")
            .with_section("Demographics"),
        DataDictionaryRecord::new("NOTES").with_description("Free text notes"),
    ]
}

#[test]
fn test_end_to_end_from_term_tables() {
    let dir = TempDir::new().unwrap();
    let store = load_tables(&dir);
    assert_eq!(store.len(), 4);

    let axioms = generate(&dictionary(), &store).unwrap();
    let age = OwlIri::new(format!("{}AGE", NS));
    let c25150 = OwlIri::new(format!("{}C25150", NCIT));
    let c25337 = OwlIri::new(format!("{}C25337", NCIT));

    assert!(axioms.contains(&Axiom::sub_class_of(c25150.clone(), c25337.clone())));
    assert!(axioms.contains(&Axiom::sub_class_of(
        format!("{}HP_0000118", OBO),
        format!("{}HP_0000001", OBO),
    )));
    assert!(axioms.contains(&Axiom::sub_class_of(c25337, format!("{}OtherThing", NS))));

    let alt_labels = axioms.annotations(&age, vocabulary::SKOS_ALT_LABEL);
    assert!(alt_labels.contains(&&AnnotationValue::string("Subject age")));
    assert!(alt_labels.contains(&&AnnotationValue::string("Organ abnormality")));
    assert_eq!(
        axioms.annotations(&c25150, vocabulary::SKOS_DEFINITION),
        vec![&AnnotationValue::string("Length of life.")]
    );

    // both records share one section class
    let section = OwlIri::new(format!("{}DemographicsDataElement", NS));
    let members = axioms.annotations(&section, vocabulary::RDFS_SEE_ALSO);
    assert_eq!(members.len(), 2);

    let counts = axioms.count_by_kind();
    assert_eq!(counts[&AxiomKind::Restriction], 2);
}

#[test]
fn test_later_tables_overwrite_earlier_ones() {
    let dir = TempDir::new().unwrap();
    let first = write_gzip(
        &dir,
        "first.csv.gz",
        &format!("Class ID,Preferred Label,Synonyms\n{}C1,Old label,Old synonym\n", NCIT),
    );
    let second = write_gzip(
        &dir,
        "second.csv.gz",
        &format!("Class ID,Preferred Label,Synonyms\n{}C1,New label,\n", NCIT),
    );

    let mut builder = TermStore::builder();
    builder.load_path(&first).unwrap();
    builder.load_path(&second).unwrap();
    let store = builder.build();

    let record = DataDictionaryRecord::new("X").with_term("NCIT:C1");
    let axioms = generate(&[record], &store).unwrap();
    let c1 = OwlIri::new(format!("{}C1", NCIT));

    assert_eq!(
        axioms.annotations(&c1, vocabulary::RDFS_LABEL),
        vec![&AnnotationValue::string("New label")]
    );
    assert!(axioms.annotations(&c1, vocabulary::SKOS_ALT_LABEL).is_empty());
}

#[test]
fn test_axiom_set_survives_json() {
    let dir = TempDir::new().unwrap();
    let store = load_tables(&dir);
    let axioms = generate(&dictionary(), &store).unwrap();

    let json = serde_json::to_string(&axioms).unwrap();
    let restored: AxiomSet = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, axioms);
}
