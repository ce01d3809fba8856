// Criterion benchmarks for Roommate Match

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use roommate_match::core::{Ranker, Scorer};
use roommate_match::models::{
    Cleanliness, DietaryPreference, Drinking, GuestsPolicy, LifestyleProfile, ListingCandidate,
    PetPreference, SleepSchedule, Smoking, UnsetPolicy, WorkSchedule,
};

fn create_profile(id: usize) -> LifestyleProfile {
    let sleep = SleepSchedule::known();
    let work = WorkSchedule::known();
    let diet = DietaryPreference::known();
    let smoking = Smoking::known();
    let drinking = Drinking::known();
    let cleanliness = Cleanliness::known();
    let guests = GuestsPolicy::known();
    let pets = PetPreference::known();

    LifestyleProfile {
        sleep_schedule: Some(sleep[id % sleep.len()].clone()),
        work_schedule: Some(work[id % work.len()].clone()),
        dietary_preference: Some(diet[(id / 2) % diet.len()].clone()),
        smoking: Some(smoking[(id / 3) % smoking.len()].clone()),
        drinking: Some(drinking[(id / 5) % drinking.len()].clone()),
        cleanliness: Some(cleanliness[(id / 7) % cleanliness.len()].clone()),
        // Every fourth profile leaves guests and pets unset
        guests_policy: (id % 4 != 0).then(|| guests[id % guests.len()].clone()),
        pet_preference: (id % 4 != 0).then(|| pets[(id / 2) % pets.len()].clone()),
    }
}

fn bench_score_pair(c: &mut Criterion) {
    let a = create_profile(1);
    let b = create_profile(6);

    let mut group = c.benchmark_group("score_pair");

    for policy in [UnsetPolicy::Renormalize, UnsetPolicy::Neutral] {
        let scorer = Scorer::new(policy);
        group.bench_with_input(
            BenchmarkId::new("score", format!("{:?}", policy)),
            &scorer,
            |bench, scorer| bench.iter(|| scorer.score(black_box(&a), black_box(&b))),
        );
    }

    group.finish();
}

fn bench_match_score(c: &mut Criterion) {
    let scorer = Scorer::default();
    let a = create_profile(3);
    let b = create_profile(8);

    c.bench_function("match_score", |bench| {
        bench.iter(|| scorer.match_score(black_box(&a), black_box(&b)));
    });
}

fn bench_ranking(c: &mut Criterion) {
    let ranker = Ranker::default();
    let viewer = create_profile(0);

    let mut group = c.benchmark_group("ranking");

    for listing_count in [10, 50, 100, 500, 1000].iter() {
        let candidates: Vec<ListingCandidate> = (0..*listing_count)
            .map(|i| ListingCandidate {
                listing_id: i as i64,
                owner_id: format!("owner_{}", i),
                owner_profile: (i % 10 != 0).then(|| create_profile(i)),
            })
            .collect();

        group.bench_with_input(
            BenchmarkId::new("rank_listings", listing_count),
            listing_count,
            |bench, _| {
                bench.iter(|| {
                    ranker.rank_listings(
                        black_box(Some(&viewer)),
                        black_box(candidates.clone()),
                        black_box(Some(20)),
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_score_pair, bench_match_score, bench_ranking);

criterion_main!(benches);
