use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use movie_recommender::domain::{Genre, RawPreferences};
use movie_recommender::pipeline::{PreferenceNormalizer, PromptComposer};

fn make_raw(n_genres: usize) -> RawPreferences {
    RawPreferences {
        mood: "thriller".to_string(),
        genres: Genre::ALL
            .iter()
            .cycle()
            .take(n_genres)
            .map(|g| g.label().to_lowercase())
            .collect(),
        language: " English ".to_string(),
        platform: "prime video".to_string(),
    }
}

fn bench_normalize(c: &mut Criterion) {
    let normalizer = PreferenceNormalizer::default();
    let mut group = c.benchmark_group("normalize");

    for n in [1, 5, 18, 50] {
        let raw = make_raw(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &raw, |b, raw| {
            b.iter(|| normalizer.normalize(black_box(raw)))
        });
    }

    group.finish();
}

fn bench_compose(c: &mut Criterion) {
    let normalizer = PreferenceNormalizer::default();
    let composer = PromptComposer::default();
    let mut group = c.benchmark_group("compose");

    for n in [1, 5, 18] {
        let prefs = normalizer
            .normalize(&make_raw(n))
            .expect("bench preferences must normalize");
        group.bench_with_input(BenchmarkId::from_parameter(n), &prefs, |b, prefs| {
            b.iter(|| composer.compose(black_box(prefs)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_normalize, bench_compose);
criterion_main!(benches);
