//! Option list layout and rendering benchmarks.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use understory::{
    geom::Expanse,
    widgets::{OptionItem, OptionList},
};

/// Build a list of `n` options with prompts of varying length.
fn build_list(n: usize) -> OptionList {
    let mut list = OptionList::new().expect("Failed to create list");
    list.add_options((0..n).map(|i| {
        let prompt = "lorem ipsum dolor sit amet ".repeat(1 + i % 4);
        Some(OptionItem::new(format!("{i}: {prompt}")))
    }))
    .expect("Failed to add options");
    list.resize(Expanse::new(40, 24));
    list
}

/// Benchmark building the line cache from scratch.
fn benchmark_line_cache(c: &mut Criterion) {
    c.bench_function("option_list_line_cache", |b| {
        b.iter(|| {
            let mut list = build_list(1000);
            black_box(list.virtual_height());
        });
    });
}

/// Benchmark paging through a laid out list while rendering each page.
fn benchmark_paging(c: &mut Criterion) {
    let mut list = build_list(1000);
    c.bench_function("option_list_page_render", |b| {
        b.iter(|| {
            list.action_page_down();
            black_box(list.render());
        });
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = benchmark_line_cache, benchmark_paging
}
criterion_main!(benches);
