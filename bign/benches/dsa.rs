//! Bign DSA benchmarks

use bign::{
    dsa::{self, Signature, SigningKey, VerifyOptions},
    BeltEngine, BignCurve, BignP256, BignP384, BignP512, DigestEngine, BELT_OID,
};
use core::hint::black_box;
use criterion::{
    criterion_group, criterion_main, measurement::Measurement, BenchmarkGroup, Criterion,
};
use signature::{Signer, Verifier};

fn signing_key<C: BignCurve>() -> SigningKey<C> {
    let bytes: Vec<u8> = (1..=C::PARAMETERS.length as u8).collect();
    SigningKey::from_bytes(&bytes).unwrap()
}

fn bench_sign<C: BignCurve, M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let sk = black_box(signing_key::<C>());
    let msg = black_box(b"example message");
    group.bench_function("sign", |b| {
        b.iter(|| {
            let sig: Signature<C> = sk.sign(msg);
            black_box(sig)
        })
    });
}

fn bench_verify<C: BignCurve, M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let sk = signing_key::<C>();
    let vk = black_box(sk.verifying_key().clone());
    let msg = black_box(b"example message");
    let sig: Signature<C> = black_box(sk.sign(msg));
    group.bench_function("verify", |b| b.iter(|| vk.verify(msg, &sig)));

    let public_key = vk.to_bytes();
    let digest = BeltEngine::hash(&[&msg[..]]);
    let sig = sig.to_bytes();
    group.bench_function("verify bytes", |b| {
        b.iter(|| dsa::verify::<C>(&public_key, &digest, &sig, &VerifyOptions::new()))
    });
}

fn bench_generate_k<C: BignCurve, M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let sk = signing_key::<C>();
    let private_key = sk.to_bytes();
    let digest = black_box(BeltEngine::hash(&[&b"example message"[..]]));
    group.bench_function("generate_k", |b| {
        b.iter(|| dsa::generate_k::<C>(&private_key, &digest, &BELT_OID, &[]))
    });
}

fn bench_curve<C: BignCurve>(c: &mut Criterion, name: &str) {
    let mut group = c.benchmark_group(name);
    bench_generate_k::<C, _>(&mut group);
    bench_sign::<C, _>(&mut group);
    bench_verify::<C, _>(&mut group);
    group.finish();
}

fn bench_dsa(c: &mut Criterion) {
    bench_curve::<BignP256>(c, "Bign bign-curve256v1");
    bench_curve::<BignP384>(c, "Bign bign-curve384v1");
    bench_curve::<BignP512>(c, "Bign bign-curve512v1");
}

criterion_group!(benches, bench_dsa);
criterion_main!(benches);
