#[macro_use]
extern crate criterion;
extern crate elk;
extern crate test_elk;

use criterion::{BenchmarkId, Criterion};
use elk::{Argument, Expression, Parameter, Runtime};
use test_elk::quiet_logger;

// f0(n: Int) -> Int { n } and every f(i + 1) calls f(i) with its own n.
fn call_chain(runtime: &mut Runtime, depth: usize) {
    runtime
        .evaluate(&Expression::make_binding(
            "f0",
            Expression::function(
                vec![Parameter::new("n", "Int")],
                "Int",
                vec![Expression::binding_ref("n")],
            ),
        ))
        .unwrap();
    for i in 1..=depth {
        let callee = format!("f{}", i - 1);
        runtime
            .evaluate(&Expression::make_binding(
                &format!("f{}", i),
                Expression::function(
                    vec![Parameter::new("n", "Int")],
                    "Int",
                    vec![Expression::call(
                        &callee,
                        vec![Argument::new("n", Expression::binding_ref("n"))],
                    )],
                ),
            ))
            .unwrap();
    }
}

fn bench_invocation(c: &mut Criterion) {
    let mut group = c.benchmark_group("invocation");
    group.sample_size(40);
    for depth in [0, 1, 2, 4, 8, 16, 32].iter() {
        let mut runtime = Runtime::with_logger(quiet_logger());
        call_chain(&mut runtime, *depth);
        let call = Expression::call(
            &format!("f{}", depth),
            vec![Argument::new("n", Expression::scalar("Int", 7i64))],
        );
        group.bench_with_input(BenchmarkId::from_parameter(depth), depth, |b, _| {
            b.iter(|| runtime.evaluate(&call).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_invocation);
criterion_main!(benches);
