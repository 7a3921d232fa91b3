use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use inference::discover::discover;
use inference::knowledge_base::KnowledgeBase;
use inference::query::query;
use shared::rule::Rule;
use shared::triple::Triple;

fn chain_kb(size: usize) -> KnowledgeBase {
    let mut kb = KnowledgeBase::new();
    for i in 0..size {
        kb.add_fact(Triple::new(&format!("n{}", i), "p", &format!("n{}", i + 1)));
    }
    kb.add_rule(Rule::new(
        Triple::new("X", "q", "Z"),
        vec![Triple::new("X", "p", "Y"), Triple::new("Y", "p", "Z")],
    ));
    kb
}

fn bench_backward_chaining(c: &mut Criterion) {
    let kb = chain_kb(64);
    let goal = Triple::new("X", "q", "Z");
    c.bench_function("backward_chaining_all_answers", |b| {
        b.iter(|| query(black_box(&goal), &kb).count())
    });

    let first_goal = Triple::new("n0", "q", "Z");
    c.bench_function("backward_chaining_first_answer", |b| {
        b.iter(|| query(black_box(&first_goal), &kb).next().is_some())
    });
}

fn bench_forward_chaining(c: &mut Criterion) {
    c.bench_function("forward_chaining_sweep", |b| {
        b.iter_batched(
            || chain_kb(64),
            |mut kb| discover(&mut kb).len(),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_backward_chaining, bench_forward_chaining);
criterion_main!(benches);
