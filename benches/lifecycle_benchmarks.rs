use access_ticket::core::{AccessRequest, AccessRequestBuilder, AdditionalStaff};
use access_ticket::lifecycle::LifecycleEngine;
use access_ticket::storage::{MemoryStorage, StoreOptions, TicketStore, snapshot};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn request() -> AccessRequest {
    AccessRequestBuilder::new()
        .primary_name("Ahmed Mansour")
        .company("Jawwal")
        .department("IT Infrastructure")
        .purpose("Routine maintenance on core distribution switches")
        .rack("Rack 12-A / Core Room")
        .equipment("Fluke Network Tester, Console Cable")
        .staff(AdditionalStaff::external("Sarah Connor", "P-98827361"))
        .build()
}

fn store_with(count: usize) -> TicketStore<MemoryStorage> {
    let options = StoreOptions {
        seed_on_first_run: false,
        ..StoreOptions::default()
    };
    let mut store = TicketStore::open(MemoryStorage::new(), options).unwrap();
    let mut engine = LifecycleEngine::new(&mut store);
    for _ in 0..count {
        engine.create(request()).unwrap();
    }
    store
}

fn bench_create(c: &mut Criterion) {
    c.bench_function("create_into_100", |b| {
        b.iter_batched(
            || store_with(100),
            |mut store| {
                LifecycleEngine::new(&mut store)
                    .create(black_box(request()))
                    .unwrap();
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

fn bench_toggle_lock(c: &mut Criterion) {
    let mut store = store_with(100);
    let id = store.tickets()[50].id().clone();
    c.bench_function("toggle_lock_in_100", |b| {
        b.iter(|| {
            LifecycleEngine::new(&mut store)
                .toggle_lock(black_box(&id))
                .unwrap();
        });
    });
}

fn bench_snapshot_codec(c: &mut Criterion) {
    let store = store_with(500);
    let raw = snapshot::encode(store.tickets()).unwrap();
    c.bench_function("snapshot_encode_500", |b| {
        b.iter(|| snapshot::encode(black_box(store.tickets())).unwrap());
    });
    c.bench_function("snapshot_decode_500", |b| {
        b.iter(|| snapshot::decode("bench", black_box(&raw)).unwrap());
    });
}

criterion_group!(benches, bench_create, bench_toggle_lock, bench_snapshot_codec);
criterion_main!(benches);
