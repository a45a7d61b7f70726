use criterion::{black_box, criterion_group, criterion_main, Criterion};
use idspan::{annotate_source, Language, Tokenizer};

fn synthetic_java(methods: usize) -> String {
    let mut source = String::from("package bench;\n\npublic class Generated {\n");
    for i in 0..methods {
        source.push_str(&format!(
            concat!(
                "    /** Adds {i} to the running total. */\n",
                "    public int step{i}(int total, String label) {{\n",
                "        logger.trace(\"step {i}: {{}}\", label); // trace\n",
                "        return total + {i} + label.length();\n",
                "    }}\n\n",
            ),
            i = i
        ));
    }
    source.push_str("}\n");
    source
}

fn bench_annotate(c: &mut Criterion) {
    let source = synthetic_java(2_000);

    c.bench_function("tokenize 12k lines", |b| {
        let tokenizer = Tokenizer::new(Language::Java);
        b.iter(|| tokenizer.tokenize(black_box(&source)).count())
    });

    c.bench_function("annotate 12k lines", |b| {
        b.iter(|| annotate_source(black_box(&source), Language::Java))
    });
}

// ベンチマークグループの定義
criterion_group!(benches, bench_annotate);
criterion_main!(benches);
