use criterion::{Criterion, criterion_group, criterion_main};
use renscript_core::{generate, parse, validate};
use std::hint::black_box;

fn make_script(lines: usize) -> String {
    let mut buf = String::with_capacity(lines * 40);
    buf.push_str("define e = Character(\"Eileen\", color=\"#c8ffc8\")\n\n");
    buf.push_str("label start:\n");

    for i in 0..lines {
        match i % 7 {
            0 => buf.push_str(&format!("    scene bg room{i} with fade\n")),
            1 => buf.push_str(&format!("    show eileen happy{i} at left with dissolve\n")),
            2 => buf.push_str(&format!("    hide eileen{i}\n")),
            3 => buf.push_str(&format!("    play music \"bgm{i}.ogg\"\n")),
            4 => buf.push_str(&format!("    e \"Hello world {i}\"\n")),
            5 => buf.push_str(&format!("    $ points{i} = {i}\n")),
            6 => {
                buf.push_str("    menu:\n");
                buf.push_str(&format!("        \"Option A {i}\":\n"));
                buf.push_str("            \"You picked A\"\n");
                buf.push_str(&format!("        \"Option B {i}\":\n"));
                buf.push_str("            \"You picked B\"\n");
            }
            _ => unreachable!(),
        }
    }

    buf.push_str("    jump start\n");
    buf
}

fn bench_full(c: &mut Criterion) {
    let src = make_script(10_000);
    let script = parse(&src);

    let mut group = c.benchmark_group("transcode");
    group.sample_size(10);
    group.bench_function("parse 10k lines", |b| {
        b.iter(|| parse(black_box(&src)));
    });
    group.bench_function("generate 10k lines", |b| {
        b.iter(|| generate(black_box(&script)));
    });
    group.bench_function("validate 10k lines", |b| {
        b.iter(|| validate(black_box(&script)));
    });
    group.finish();
}

criterion_group!(benches, bench_full);
criterion_main!(benches);
