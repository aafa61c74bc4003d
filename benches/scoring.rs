//! Extraction and scoring benchmarks
//!
//! Run with: cargo bench --bench scoring

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use trackscout::catalog::ResultExtractor;
use trackscout::metadata::TrackMetadata;
use trackscout::pipeline::rank_candidates;

const RESULTS_PER_PAGE: usize = 25;

fn search_page() -> String {
    let mut items = String::new();
    for i in 0..RESULTS_PER_PAGE {
        items.push_str(&format!(
            r#"<li class="bucket-item track">
                 <p class="buk-track-title">
                   <span class="buk-track-primary-title">On My Mind {i}</span>
                   <span class="buk-track-remixed">Extended Mix</span>
                 </p>
                 <p class="buk-track-artists"><a>Diplo</a>, <a>SIDEPIECE</a>, <a>Artist {i}</a></p>
                 <p class="buk-track-genre"><a data-genre="{genre}">House</a></p>
               </li>"#,
            genre = i % 100
        ));
    }
    format!(
        r#"<html><body><div class="bucket tracks standard-interior-tracks">
             <ul class="bucket-items">{items}</ul></div></body></html>"#
    )
}

fn benchmark_extract(c: &mut Criterion) {
    let page = search_page();
    let extractor = ResultExtractor::new();

    let mut group = c.benchmark_group("extract");
    group.throughput(Throughput::Elements(RESULTS_PER_PAGE as u64));
    group.bench_function("search_page", |b| {
        b.iter(|| extractor.extract(black_box(&page)));
    });
    group.finish();
}

fn benchmark_rank(c: &mut Criterion) {
    let candidates = ResultExtractor::new().extract(&search_page());
    let track = TrackMetadata::new("Diplo", "On My Mind");

    let mut group = c.benchmark_group("rank");
    group.throughput(Throughput::Elements(RESULTS_PER_PAGE as u64));
    group.bench_function("score_and_sort", |b| {
        b.iter(|| rank_candidates(black_box(&track), black_box(candidates.clone())));
    });
    group.finish();
}

criterion_group!(benches, benchmark_extract, benchmark_rank);
criterion_main!(benches);
