use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_qr_encoder::encoder::mask::select_mask;
use rust_qr_encoder::encoder::penalty::PenaltyScore;
use rust_qr_encoder::{ECLevel, QrEncoder, encode};

fn bench_encode_numeric_v1(c: &mut Criterion) {
    c.bench_function("encode_numeric_v1", |b| {
        b.iter(|| encode(black_box("01234567"), ECLevel::M))
    });
}

fn bench_encode_url_v5(c: &mut Criterion) {
    let url = "http://www.example.com/qr?id=0123456789";
    c.bench_function("encode_url_v5_h", |b| {
        b.iter(|| encode(black_box(url), ECLevel::H))
    });
}

fn bench_encode_bytes_v40(c: &mut Criterion) {
    let data = vec![0xA5u8; 2900];
    c.bench_function("encode_bytes_v40_l", |b| {
        b.iter(|| encode(black_box(&data), ECLevel::L))
    });
}

fn bench_penalty_v40(c: &mut Criterion) {
    let data = vec![0x5Au8; 2900];
    let symbol = encode(&data, ECLevel::L).unwrap();
    c.bench_function("penalty_score_v40", |b| {
        b.iter(|| PenaltyScore::evaluate(black_box(symbol.matrix())))
    });
    c.bench_function("select_mask_v40", |b| {
        b.iter(|| select_mask(black_box(symbol.matrix())))
    });
}

fn bench_write_png(c: &mut Criterion) {
    let encoder = QrEncoder::new();
    let symbol = encoder.encode_str("http://www.example.com/").unwrap();
    c.bench_function("write_png_v2", |b| {
        b.iter(|| {
            let mut out = Vec::new();
            encoder.write_png(black_box(&symbol), &mut out).unwrap();
            out
        })
    });
}

criterion_group!(
    benches,
    bench_encode_numeric_v1,
    bench_encode_url_v5,
    bench_encode_bytes_v40,
    bench_penalty_v40,
    bench_write_png
);
criterion_main!(benches);
