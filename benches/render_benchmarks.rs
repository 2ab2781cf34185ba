use criterion::{black_box, criterion_group, criterion_main, Criterion};
use htmlnode::{attr, boxed, el, element, render, text, Element, Node};

fn table(rows: usize) -> Element {
    let body = (0..rows).map(|i| {
        boxed(el!(
            "tr",
            attr!("class", if i % 2 == 0 { "even" } else { "odd" }),
            el!("td", text(format!("row {i}"))),
            el!("td", text("a < b & c")),
        ))
    });
    el!("table", attr!("id", "data"), element("tbody", body))
}

fn bench_render_table(c: &mut Criterion) {
    let small = table(10);
    let large = table(1_000);

    c.bench_function("render_table_10", |b| {
        b.iter(|| render(black_box(&small)))
    });
    c.bench_function("render_table_1000", |b| {
        b.iter(|| render(black_box(&large)))
    });
}

fn bench_escape_text(c: &mut Criterion) {
    let clean = text("plain text without anything to escape ".repeat(32));
    let dirty = text("<script>alert('x & y')</script>".repeat(32));

    c.bench_function("render_text_clean", |b| {
        b.iter(|| black_box(&clean).render())
    });
    c.bench_function("render_text_escaped", |b| {
        b.iter(|| black_box(&dirty).render())
    });
}

criterion_group!(benches, bench_render_table, bench_escape_text);
criterion_main!(benches);
