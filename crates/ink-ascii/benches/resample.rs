use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ink_ascii::compositor::Converter;
use ink_ascii::resample::resample;
use ink_core::config::RenderConfig;
use ink_core::frame::{Channels, PixelBuffer};

fn gradient_buffer(width: u32, height: u32, channels: Channels) -> PixelBuffer {
    let n = channels.count();
    let data: Vec<u8> = (0..width as usize * height as usize * n)
        .map(|i| (i % 256) as u8)
        .collect();
    match PixelBuffer::new(width, height, channels, data) {
        Ok(buf) => buf,
        Err(e) => panic!("buffer de bench invalide : {e}"),
    }
}

fn bench_resample(c: &mut Criterion) {
    let gray = gradient_buffer(1920, 1080, Channels::Gray);
    let rgb = gradient_buffer(1920, 1080, Channels::Rgb);

    c.bench_function("resample_1080p_gray_120", |b| {
        b.iter(|| resample(black_box(&gray), 120, 34));
    });
    c.bench_function("resample_1080p_rgb_120", |b| {
        b.iter(|| resample(black_box(&rgb), 120, 34));
    });
}

fn bench_convert(c: &mut Criterion) {
    let rgb = gradient_buffer(1920, 1080, Channels::Rgb);
    let Ok(converter) = Converter::new(&RenderConfig::default()) else {
        return;
    };
    c.bench_function("convert_1080p_default", |b| {
        b.iter(|| converter.convert(black_box(&rgb)));
    });
}

criterion_group!(benches, bench_resample, bench_convert);
criterion_main!(benches);
