use criterion::{criterion_group, criterion_main, Criterion};
use syslog_format::{default_format, local_format, rfc3164_format, rfc5424_format, Priority};

fn render_message(c: &mut Criterion) {
    let pri = Priority::from(165);
    let hostname = "mymachine.example.com";
    let tag = "evntslog";
    let content = "An application event log entry...";

    let mut group = c.benchmark_group("render");

    group.bench_function("default", |b| {
        b.iter(|| {
            let _ = default_format(pri, hostname, tag, content);
        })
    });

    group.bench_function("local", |b| {
        b.iter(|| {
            let _ = local_format(pri, hostname, tag, content);
        })
    });

    group.bench_function("rfc3164", |b| {
        b.iter(|| {
            let _ = rfc3164_format(pri, hostname, tag, content);
        })
    });

    group.bench_function("rfc5424", |b| {
        b.iter(|| {
            let _ = rfc5424_format(pri, hostname, tag, content);
        })
    });

    group.finish();
}

criterion_group!(benches, render_message);
criterion_main!(benches);
