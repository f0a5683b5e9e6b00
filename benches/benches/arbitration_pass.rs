// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};

use canopy_select::arbiter::Arbiter;
use canopy_select::policy::DwellThreshold;
use canopy_select::store::{Candidate, CandidateFlags, CandidateId, CandidateSet};
use canopy_select::types::Tick;

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
}

fn gen_candidates(count: usize, priority_levels: u64) -> (CandidateSet, Vec<CandidateId>) {
    let mut set = CandidateSet::new();
    let mut ids = Vec::with_capacity(count);
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    for _ in 0..count {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "priority levels are small by construction"
        )]
        let priority = (rng.next_u64() % priority_levels) as i32;
        ids.push(set.insert(Candidate {
            priority,
            ..Candidate::default()
        }));
    }
    (set, ids)
}

// Every committed candidate is valid; the pass finds its winner in the top
// bucket and still has to drain the rest.
fn bench_commit_and_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("commit_and_resolve");
    for &count in &[16_usize, 256, 4096] {
        let (set, ids) = gen_candidates(count, 8);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(format!("candidates_{count}"), |b| {
            b.iter_batched(
                || (set.clone(), Arbiter::new()),
                |(mut set, mut arbiter)| {
                    for id in &ids {
                        arbiter.commit(&set, *id);
                    }
                    black_box(arbiter.tick(&mut set))
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

// Worst case for the scan: nothing committed is valid anymore, so every
// bucket is visited before the drain.
fn bench_resolve_all_invalid(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_all_invalid");
    for &count in &[256_usize, 4096] {
        let (mut set, ids) = gen_candidates(count, 8);
        for id in &ids {
            if let Some(candidate) = set.get_mut(*id) {
                candidate.flags.remove(CandidateFlags::INTERACTABLE);
            }
        }
        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(format!("candidates_{count}"), |b| {
            b.iter_batched(
                || (set.clone(), Arbiter::new()),
                |(mut set, mut arbiter)| {
                    for id in &ids {
                        arbiter.commit(&set, *id);
                    }
                    black_box(arbiter.tick(&mut set))
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

// A full tick cycle at hover-sized contact counts: events, dwell sweep,
// resolution.
fn bench_contact_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("contact_cycle");
    for &touched in &[4_usize, 32] {
        let (set, ids) = gen_candidates(touched, 4);
        let policy = DwellThreshold { min_ticks: 2 };
        group.throughput(Throughput::Elements(touched as u64));
        group.bench_function(format!("touched_{touched}"), |b| {
            b.iter_batched(
                || (set.clone(), Arbiter::new()),
                |(mut set, mut arbiter)| {
                    for t in 0..4_u64 {
                        let now = Tick(t);
                        for id in &ids {
                            arbiter.contact_active(&set, *id, now);
                        }
                        arbiter.commit_ready(&set, &policy, now);
                        black_box(arbiter.tick(&mut set));
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_commit_and_resolve,
    bench_resolve_all_invalid,
    bench_contact_cycle
);
criterion_main!(benches);
