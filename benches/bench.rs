// Criterion benchmarks for the candidate filter

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use matrimony_core::core::filters::visible_queue;
use matrimony_core::models::{AgeBracket, CandidateProfile, Choice, FilterCriteria, Gender};
use std::collections::HashSet;

const RELIGIONS: [&str; 5] = ["Hindu", "Muslim", "Christian", "Sikh", "Jain"];
const LOCATIONS: [&str; 4] = ["Mumbai", "Delhi", "Pune", "Chennai"];

fn create_candidate(id: usize) -> CandidateProfile {
    CandidateProfile {
        id: id.to_string(),
        name: format!("Candidate {}", id),
        age: 21 + (id % 25) as u8,
        gender: if id % 2 == 0 { Gender::Female } else { Gender::Male },
        religion: RELIGIONS[id % RELIGIONS.len()].to_string(),
        caste: String::new(),
        location: LOCATIONS[id % LOCATIONS.len()].to_string(),
        bio: String::new(),
        photo_ref: String::new(),
    }
}

fn bench_visible_queue(c: &mut Criterion) {
    let mut group = c.benchmark_group("visible_queue");

    let criteria = FilterCriteria {
        age: AgeBracket::Range { min: 26, max: 30 },
        religion: Choice::from("Hindu"),
        ..Default::default()
    };

    for size in [100, 1_000, 10_000].iter() {
        let pool: Vec<CandidateProfile> = (0..*size).map(create_candidate).collect();
        // A tenth of the pool already decided on
        let excluded: HashSet<String> = (0..*size).step_by(10).map(|i| i.to_string()).collect();

        group.bench_with_input(BenchmarkId::new("default_criteria", size), size, |b, _| {
            b.iter(|| {
                visible_queue(
                    black_box(&pool),
                    black_box(&excluded),
                    Gender::Male,
                    "",
                    &FilterCriteria::default(),
                )
            });
        });

        group.bench_with_input(BenchmarkId::new("narrowed_with_search", size), size, |b, _| {
            b.iter(|| {
                visible_queue(
                    black_box(&pool),
                    black_box(&excluded),
                    Gender::Male,
                    "candidate 1",
                    &criteria,
                )
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_visible_queue);
criterion_main!(benches);
