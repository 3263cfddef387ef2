use criterion::{black_box, criterion_group, criterion_main, Criterion};
use khmer_tokenizer::{count_khmer_words, Tokenizer};

fn benchmark_segmentation(c: &mut Criterion) {
    let tokenizer = Tokenizer::builtin();

    let khmer = "ថ្ងៃនេះខ្ញុំអានសៀវភៅភាសាខ្មែរនៅសាលារៀនជាមួយមិត្ត។";
    let latin = "The quick brown fox jumps over the lazy dog, 42 times!";

    c.bench_function("tokenize_khmer_sentence", |b| {
        b.iter(|| tokenizer.tokenize(black_box(khmer), true))
    });

    c.bench_function("tokenize_latin_sentence", |b| {
        b.iter(|| tokenizer.tokenize(black_box(latin), true))
    });

    let document = format!("{} {} ", khmer, latin).repeat(200);
    c.bench_function("count_khmer_words_document", |b| {
        b.iter(|| count_khmer_words(black_box(&document)))
    });
}

criterion_group!(benches, benchmark_segmentation);
criterion_main!(benches);
