use criterion::Criterion;
use magpie::tokenize;

static HTML: &str = include_str!("../tests/samples/sample.html");

pub fn benchmark_tokenize(c: &mut Criterion) {
    c.bench_function("tokenize sample document", |b| b.iter(|| tokenize(HTML)));
}
