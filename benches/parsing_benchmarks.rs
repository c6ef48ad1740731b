use criterion::{black_box, criterion_group, criterion_main, Criterion};
use usaddress_rs::{extract, parse};

fn bench_address_parsing(c: &mut Criterion) {
    c.bench_function("parse_simple_address", |b| {
        b.iter(|| parse(black_box("123 N Center St Lehi, UT 84043")))
    });

    c.bench_function("parse_complex_address", |b| {
        b.iter(|| parse(black_box("137 N 800 E Apt 5B Spanish Fork, UT 84660-1234")))
    });

    c.bench_function("parse_po_box", |b| {
        b.iter(|| parse(black_box("PO BOX 523029 West Chester, PA 18630")))
    });
}

fn bench_address_extraction(c: &mut Criterion) {
    c.bench_function("extract_embedded_address", |b| {
        b.iter(|| {
            extract(black_box(
                "our new office is at 2505 NE 135th St, Seattle, WA 98125 starting Monday",
            ))
        })
    });
}

criterion_group!(benches, bench_address_parsing, bench_address_extraction);
criterion_main!(benches);
