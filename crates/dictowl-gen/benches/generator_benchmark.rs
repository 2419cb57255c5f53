use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dictowl_gen::{Choice, DataDictionaryRecord, generate};
use dictowl_store::TermStore;

fn create_term_hierarchy(depth: usize) -> TermStore {
    // Term_i has parent Term_{i-1}, Term_0 is the root
    let mut table = String::from("Class ID,Preferred Label,Synonyms,Parents,definition\n");
    for i in 0..depth {
        let parent = if i > 0 {
            format!("http://example.org/Term{}", i - 1)
        } else {
            String::new()
        };
        table.push_str(&format!(
            "http://example.org/Term{i},Term {i},Synonym {i}|Alias {i},{parent},Definition of term {i}\n",
        ));
    }

    let mut builder = TermStore::builder();
    builder
        .load_csv(table.as_bytes())
        .expect("benchmark table should parse");
    builder.build()
}

fn create_dictionary(size: usize, depth: usize) -> Vec<DataDictionaryRecord> {
    (0..size)
        .map(|i| {
            DataDictionaryRecord::new(format!("FIELD_{}", i))
                .with_label(format!("Field {}", i))
                .with_section(format!("section {}", i % 5))
                .with_choice(Choice::new("0", "No"))
                .with_choice(Choice::new("1", "Yes"))
                .with_term(format!("http://example.org/Term{}", depth - 1 - (i % depth)).as_str())
        })
        .collect()
}

fn benchmark_generate(c: &mut Criterion) {
    let depth = 50;
    let store = create_term_hierarchy(depth);

    for &size in &[10, 100, 500] {
        let records = create_dictionary(size, depth);

        c.bench_function(&format!("generate_{}_records", size), |b| {
            b.iter(|| {
                let _axioms = generate(black_box(&records), &store).unwrap();
            });
        });
    }
}

fn benchmark_term_store_load(c: &mut Criterion) {
    c.bench_function("term_store_load_1000_terms", |b| {
        b.iter(|| create_term_hierarchy(black_box(1000)));
    });
}

criterion_group!(benches, benchmark_generate, benchmark_term_store_load);
criterion_main!(benches);
