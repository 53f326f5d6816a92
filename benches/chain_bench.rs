//! Benchmark for building and invoking decorator chains.
//!
//! Compares the closure chain, the trait-object layers and the inline
//! role checks for the same response.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use structural_patterns::compose::{Chain, boxed, map_output};
use structural_patterns::decorator::{
    ApiResponse, DEMO_POST_ID, UserRole, blog_post_response, decorate_for_roles, inline_response,
    respond_with_layers,
};

// =============================================================================
// Chain Construction
// =============================================================================

fn benchmark_chain_depth(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("chain_depth");

    for depth in [1usize, 8, 64] {
        group.bench_with_input(BenchmarkId::new("build_and_invoke", depth), &depth, |bencher, &depth| {
            bencher.iter(|| {
                let operation = (0..depth)
                    .fold(Chain::from_boxed(boxed(|x: u64| x)), |chain, _| {
                        chain.wrap(map_output(|x: u64| x.wrapping_add(1)))
                    })
                    .build();
                black_box(operation(black_box(0)))
            });
        });
    }

    group.finish();
}

// =============================================================================
// Response Variants
// =============================================================================

fn benchmark_response_variants(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("response_variants");
    let roles = UserRole::ALL;

    group.bench_function("closure_chain", |bencher| {
        bencher.iter(|| {
            let operation = decorate_for_roles(blog_post_response(DEMO_POST_ID), black_box(&roles));
            black_box(operation(()))
        });
    });

    group.bench_function("layered_objects", |bencher| {
        bencher.iter(|| black_box(respond_with_layers(DEMO_POST_ID, black_box(&roles)).generate()));
    });

    group.bench_function("inline", |bencher| {
        bencher.iter(|| black_box(inline_response(DEMO_POST_ID, black_box(&roles))));
    });

    group.finish();
}

criterion_group!(benches, benchmark_chain_depth, benchmark_response_variants);
criterion_main!(benches);
