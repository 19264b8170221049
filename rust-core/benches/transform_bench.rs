//! Performance benchmarks for framing and transforms

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use spectral_frames::transform::{MixedRadixFft, PowerOfTwoFft, RealInputFft};
use spectral_frames::{FrameSequence, SampleBuffer, SpectrogramConfig, SpectrumTransform};

fn bench_framing(c: &mut Criterion) {
    // 10 seconds at 44.1kHz
    let buffer = SampleBuffer::sine(440.0, 0.5, 44100.0, 441_000);

    c.bench_function("divide_10s_1024_512", |b| {
        b.iter(|| FrameSequence::new(black_box(buffer.samples()), 1024, 512).unwrap());
    });
}

fn bench_transforms(c: &mut Criterion) {
    let buffer = SampleBuffer::sine(1000.0, 1.0, 48000.0, 4096);
    let transforms: Vec<Box<dyn SpectrumTransform>> = vec![
        Box::new(PowerOfTwoFft::new(4096).unwrap()),
        Box::new(MixedRadixFft::new(4096).unwrap()),
        Box::new(RealInputFft::new(4096).unwrap()),
    ];

    for fft in &transforms {
        c.bench_function(&format!("forward_4096_{}", fft.name()), |b| {
            b.iter(|| fft.forward(black_box(buffer.samples())).unwrap());
        });
    }
}

fn bench_spectrogram(c: &mut Criterion) {
    let buffer = SampleBuffer::sine(440.0, 0.5, 44100.0, 441_000);
    let config = SpectrogramConfig::default();

    c.bench_function("spectrogram_10s_default", |b| {
        b.iter(|| spectral_frames::spectrum::analyze(black_box(buffer.samples()), &config).unwrap());
    });
}

criterion_group!(benches, bench_framing, bench_transforms, bench_spectrogram);
criterion_main!(benches);
