use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use bioguard_capture_rs::fingerprint_pipeline::{
    Bitmap, CaptureConfig, CaptureToBmpPipeline, ExtractionConfig, FingerprintSample,
    FingerprintSensor, GrayscaleBmpWriter, Result, TemplateExtractor,
};
use std::io::Cursor;

/// Diagonal bands of bright and dark, four pixels wide, as a stand-in for
/// ridge structure.
fn generate_ridge_pattern(width: u32, height: u32) -> Vec<u8> {
    let mut data = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height {
        for x in 0..width {
            let value = if (x + y) / 4 % 2 == 0 { 200 } else { 40 };
            data.push(value);
        }
    }
    data
}

struct SyntheticSensor {
    width: u32,
    height: u32,
}

impl FingerprintSensor for SyntheticSensor {
    fn capture_sample(&self, _config: &CaptureConfig) -> Result<FingerprintSample> {
        Ok(FingerprintSample {
            unit_id: 1,
            width: self.width,
            height: self.height,
            data: generate_ridge_pattern(self.width, self.height),
            horizontal_resolution: 197,
            vertical_resolution: 197,
            quality: 80,
        })
    }
}

fn benchmark_capture_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("capture_by_size");

    let sizes = vec![
        (64, 80, "64x80"),
        (256, 360, "256x360"),
        (512, 512, "512x512"),
    ];

    for (width, height, label) in sizes {
        group.bench_with_input(
            BenchmarkId::from_parameter(label),
            &(width, height),
            |b, &(width, height)| {
                let pipeline = CaptureToBmpPipeline::with_custom(
                    SyntheticSensor { width, height },
                    GrayscaleBmpWriter,
                    CaptureConfig::default(),
                );

                b.iter(|| {
                    let mut output = Cursor::new(Vec::new());
                    let _ = pipeline.capture_to_writer(black_box(&mut output));
                });
            },
        );
    }

    group.finish();
}

fn benchmark_validation_overhead(c: &mut Criterion) {
    let mut group = c.benchmark_group("validation_overhead");

    group.bench_function("with_validation", |b| {
        let config = CaptureConfig::builder().validate_dimensions(true).build();
        let pipeline = CaptureToBmpPipeline::with_custom(
            SyntheticSensor { width: 256, height: 360 },
            GrayscaleBmpWriter,
            config,
        );

        b.iter(|| {
            let mut output = Cursor::new(Vec::new());
            let _ = pipeline.capture_to_writer(black_box(&mut output));
        });
    });

    group.bench_function("without_validation", |b| {
        let config = CaptureConfig::builder().validate_dimensions(false).build();
        let pipeline = CaptureToBmpPipeline::with_custom(
            SyntheticSensor { width: 256, height: 360 },
            GrayscaleBmpWriter,
            config,
        );

        b.iter(|| {
            let mut output = Cursor::new(Vec::new());
            let _ = pipeline.capture_to_writer(black_box(&mut output));
        });
    });

    group.finish();
}

fn benchmark_template_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("template_extraction");

    let sizes = vec![(64, 80, "64x80"), (128, 160, "128x160")];

    for (width, height, label) in sizes {
        let data = generate_ridge_pattern(width, height);
        let mut bitmap = Bitmap::new();
        bitmap.set_image_data(&data, width, height).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(label), &bitmap, |b, bitmap| {
            let extractor = TemplateExtractor::new(ExtractionConfig::default());

            b.iter(|| {
                let _ = extractor.extract(black_box(bitmap));
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_capture_sizes,
    benchmark_validation_overhead,
    benchmark_template_extraction
);
criterion_main!(benches);
