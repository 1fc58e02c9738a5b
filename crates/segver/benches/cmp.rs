use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use segver::{EMPTY_VERSION, SEMVER, SIMPLE, Version, find_max};

fn version_cmp_numbers(c: &mut Criterion) {
    let sa = "1.82";
    let sb = "1.82.0";
    let va = SIMPLE.extract(sa).unwrap();
    let vb = SIMPLE.extract(sb).unwrap();
    c.bench_function(&format!("Compare {sa} and {sb}"), |b| {
        b.iter(|| {
            let _ver = black_box(va.cmp(&vb));
        })
    });
}

fn version_cmp_one_prerelease(c: &mut Criterion) {
    let sa = "1.82.0";
    let sb = "1.82.0-alpha.1";
    let va = SEMVER.extract(sa).unwrap();
    let vb = SEMVER.extract(sb).unwrap();
    c.bench_function(&format!("Compare {sa} and {sb}"), |b| {
        b.iter(|| {
            let _ver = black_box(va.cmp(&vb));
        })
    });
}

fn version_cmp_both_prerelease(c: &mut Criterion) {
    let sa = "1.82.0-RC.4";
    let sb = "1.82.0-alpha.1";
    let va = SEMVER.extract(sa).unwrap();
    let vb = SEMVER.extract(sb).unwrap();
    c.bench_function(&format!("Compare {sa} and {sb}"), |b| {
        b.iter(|| {
            let _ver = black_box(va.cmp(&vb));
        })
    });
}

fn version_extract_semver(c: &mut Criterion) {
    let input = "1.82.0-rc.4+build.17";
    c.bench_function(&format!("Extract {input}"), |b| {
        b.iter(|| {
            let _ver = black_box(SEMVER.extract(black_box(input)).unwrap());
        })
    });
}

fn version_find_max(c: &mut Criterion) {
    let versions: Vec<Version> = (0..1000)
        .map(|i| SIMPLE.extract(&format!("{}.{}.{}", i % 7, i % 13, i)).unwrap())
        .collect();
    c.bench_function("Find max of 1000 versions", |b| {
        b.iter(|| {
            let _max = black_box(find_max(&versions, &EMPTY_VERSION, true));
        })
    });
}

criterion_group!(
    benches,
    version_cmp_both_prerelease,
    version_cmp_numbers,
    version_cmp_one_prerelease,
    version_extract_semver,
    version_find_max
);
criterion_main!(benches);
