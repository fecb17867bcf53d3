//! # Signature Verification Benchmarks
//!
//! - Buffer verification across payload sizes (hashing dominates large inputs)
//! - Key order: a signature by the last active key pays for every earlier
//!   failed attempt
//! - File verification through the resolver on the in-memory file system
//! - Embedded trust store startup and teardown
//! - Signature path derivation

use crate::{started_service, MemoryService};
use criterion::{black_box, BatchSize, BenchmarkId, Criterion, Throughput};
use ks_signature_verification::test_helpers::{production_key, test_key};
use ks_signature_verification::{
    derive_sig_path, parse_public_blob, InMemoryFileSystem, RsaPssProvider,
    Sha512HashProvider, SignatureVerificationApi, SignatureVerificationService, TrustMode,
    VerifierConfig, EMBEDDED_KEYS,
};
use rand::RngCore;
use std::time::Duration;

fn random_payload(size: usize) -> Vec<u8> {
    let mut payload = vec![0u8; size];
    rand::thread_rng().fill_bytes(&mut payload);
    payload
}

pub fn bench_verify_buffer(c: &mut Criterion) {
    let mut group = c.benchmark_group("verify_buffer");
    group.measurement_time(Duration::from_secs(5));

    let service = started_service(TrustMode::PRODUCTION);

    for size in [64usize, 4 * 1024, 64 * 1024, 1024 * 1024] {
        let payload = random_payload(size);
        let signature = production_key().sign(&payload);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &payload, |b, payload| {
            b.iter(|| black_box(service.verify_buffer(payload, &signature).is_ok()))
        });
    }

    group.finish();
}

pub fn bench_key_order(c: &mut Criterion) {
    let mut group = c.benchmark_group("key_order");

    let service = started_service(TrustMode::TEST_SIGNING);
    let payload = random_payload(256);
    let first = production_key().sign(&payload);
    let last = test_key().sign(&payload);
    let forged = vec![0x5A; first.len()];

    group.bench_function("first_key", |b| {
        b.iter(|| black_box(service.verify_buffer(&payload, &first).is_ok()))
    });
    group.bench_function("last_key", |b| {
        b.iter(|| black_box(service.verify_buffer(&payload, &last).is_ok()))
    });
    group.bench_function("no_key", |b| {
        b.iter(|| black_box(service.verify_buffer(&payload, &forged).is_err()))
    });

    group.finish();
}

fn seeded_file_service(size: usize) -> MemoryService {
    let service = started_service(TrustMode::PRODUCTION);
    let payload = random_payload(size);
    service
        .file_system()
        .insert(r"\Program Files\App\bin\module.dll", payload.clone());
    service
        .file_system()
        .insert(r"\Program Files\App\bin\module.sig", production_key().sign(&payload));
    service
}

pub fn bench_verify_file(c: &mut Criterion) {
    let mut group = c.benchmark_group("verify_file");

    for size in [4 * 1024usize, 1024 * 1024] {
        let service = seeded_file_service(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &service, |b, service| {
            b.iter(|| {
                black_box(
                    service
                        .verify_file(r"\Program Files\App\bin\module.dll", None)
                        .is_ok(),
                )
            })
        });
    }

    group.finish();
}

pub fn bench_startup(c: &mut Criterion) {
    let mut group = c.benchmark_group("startup");

    for (label, test_signing) in [("production", false), ("test_signing", true)] {
        let fresh = || {
            SignatureVerificationService::new(
                VerifierConfig::default().with_test_signing(test_signing),
                RsaPssProvider::new(),
                Sha512HashProvider::new(),
                InMemoryFileSystem::new(),
            )
            .expect("default config is valid")
        };

        group.bench_function(label, |b| {
            b.iter_batched(
                fresh,
                |mut service| {
                    service.startup().expect("embedded keys import");
                    service.shutdown();
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.bench_function("parse_embedded_blobs", |b| {
        b.iter(|| {
            for record in &EMBEDDED_KEYS {
                black_box(parse_public_blob(record.material).is_ok());
            }
        })
    });

    group.finish();
}

pub fn bench_sig_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("sig_path");

    let short = r"\A\B\file.tar.gz".to_string();
    let long = format!(r"\{}\payload.bin", "deeply\\nested".repeat(64));

    group.bench_function("short", |b| {
        b.iter(|| black_box(derive_sig_path(&short, '\\').is_ok()))
    });
    group.bench_function("long", |b| {
        b.iter(|| black_box(derive_sig_path(&long, '\\').is_ok()))
    });

    group.finish();
}
