//! Batch resize regression test
//!
//! Runs the directory batch runner over temporary directories holding a
//! mix of valid PNG files, a corrupt one, and non-PNG files.
//!
//! Run with:
//! ```
//! cargo test -p resizer --test batch_reg
//! ```

use resizer::batch::{BatchConfig, BatchError, list_input_files, run, run_with_progress};
use resizer::io::{ImageFormat, read_image, write_image};
use resizer::transform::{
    ScaleMethod, SizePolicy, TargetSize, TransformError, resample, scale_to_size,
};
use resizer_test::{RegParams, synth};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn flag(b: bool) -> f64 {
    if b { 1.0 } else { 0.0 }
}

/// Fill `dir` with three valid PNG files, one corrupt PNG and a text file.
fn populate(dir: &Path) {
    let a = synth::gradient(40, 20).expect("gradient");
    write_image(&a, dir.join("a.png"), ImageFormat::Png).expect("write a");
    let b = synth::quadrants(10, 10, [synth::RED, synth::GREEN, synth::BLUE, synth::WHITE])
        .expect("quadrants");
    write_image(&b, dir.join("b.image.png"), ImageFormat::Png).expect("write b");
    let c = synth::gradient(30, 30).expect("gradient");
    write_image(&c, dir.join("c.PNG"), ImageFormat::Png).expect("write c");
    fs::write(dir.join("broken.png"), b"not really a png").expect("write broken");
    fs::write(dir.join("notes.txt"), b"ignored").expect("write notes");
}

#[test]
fn batch_reg_run() {
    let mut rp = RegParams::new("batch_run");
    let input = tempdir().expect("input dir");
    let output = tempdir().expect("output dir");
    populate(input.path());

    // Only *.png files, case-insensitive, sorted
    let files = list_input_files(input.path()).expect("list");
    let names: Vec<String> = files
        .iter()
        .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .collect();
    rp.compare_values(
        1.0,
        flag(names == ["a.png", "b.image.png", "broken.png", "c.PNG"]),
        0.0,
    );

    let config = BatchConfig::new(input.path(), output.path(), TargetSize::percent(50.0, 50.0))
        .with_prefix("small_")
        .with_suffix("_x")
        .with_method(ScaleMethod::Linear);

    let mut ticks = Vec::new();
    let report = run_with_progress(&config, |done, total| ticks.push((done, total)))
        .expect("batch run");

    rp.compare_values(1.0, flag(ticks == [(1, 4), (2, 4), (3, 4), (4, 4)]), 0.0);
    rp.compare_values(3.0, report.written.len() as f64, 0.0);
    rp.compare_values(1.0, report.failures.len() as f64, 0.0);
    rp.compare_values(
        1.0,
        flag(matches!(
            report.failures.first(),
            Some((p, BatchError::Image(_))) if p.ends_with("broken.png")
        )),
        0.0,
    );

    // Output names and sizes
    for (name, w, h) in [
        ("small_a_x.png", 20, 10),
        ("small_b_x.png", 5, 5),
        ("small_c_x.png", 15, 15),
    ] {
        let path = output.path().join(name);
        rp.compare_values(1.0, flag(report.written.contains(&path)), 0.0);
        let image = read_image(&path).expect("read output");
        rp.compare_values(w as f64, image.width() as f64, 0.0);
        rp.compare_values(h as f64, image.height() as f64, 0.0);
    }

    // The written pixels are exactly the in-memory resample
    let src = read_image(input.path().join("a.png")).expect("read a");
    let expected = resample(
        &src,
        TargetSize::percent(50.0, 50.0),
        ScaleMethod::Linear,
        SizePolicy::Minimal,
    )
    .expect("resample a");
    let written = read_image(output.path().join("small_a_x.png")).expect("read output a");
    rp.compare_images(&expected, &written);

    // Sources are untouched
    rp.compare_values(
        1.0,
        flag(read_image(input.path().join("a.png")).ok() == Some(src)),
        0.0,
    );

    assert!(rp.cleanup(), "batch run regression test failed");
}

#[test]
fn batch_reg_per_image_failures() {
    let mut rp = RegParams::new("batch_failures");
    let input = tempdir().expect("input dir");
    let output = tempdir().expect("output dir");
    populate(input.path());

    // Every valid file is too small after scaling; the batch still finishes
    let config = BatchConfig::new(input.path(), output.path(), TargetSize::pixels(1, 1));
    let report = run(&config).expect("batch run");
    rp.compare_values(0.0, report.written.len() as f64, 0.0);
    rp.compare_values(4.0, report.failures.len() as f64, 0.0);
    let size_errors = report
        .failures
        .iter()
        .filter(|(_, e)| matches!(e, BatchError::Transform(TransformError::InvalidSize { .. })))
        .count();
    rp.compare_values(3.0, size_errors as f64, 0.0);

    // Bicubic is reported per image, after size validation
    let config = config
        .with_method(ScaleMethod::Bicubic)
        .with_policy(SizePolicy::bounded());
    let config = BatchConfig {
        target: TargetSize::pixels(8, 8),
        ..config
    };
    let report = run(&config).expect("batch run");
    let unimplemented = report
        .failures
        .iter()
        .filter(|(_, e)| {
            matches!(
                e,
                BatchError::Transform(TransformError::UnimplementedMethod(ScaleMethod::Bicubic))
            )
        })
        .count();
    rp.compare_values(3.0, unimplemented as f64, 0.0);
    rp.compare_values(0.0, report.written.len() as f64, 0.0);
    let leftovers = fs::read_dir(output.path()).expect("read output").count();
    rp.compare_values(0.0, leftovers as f64, 0.0);

    assert!(rp.cleanup(), "batch failure regression test failed");
}

#[test]
fn batch_reg_config() {
    let mut rp = RegParams::new("batch_config");
    let dir = tempdir().expect("dir");
    populate(dir.path());

    // Same directory without prefix or suffix would overwrite the sources
    let same = BatchConfig::new(dir.path(), dir.path(), TargetSize::pixels(4, 4));
    rp.compare_values(
        1.0,
        flag(matches!(run(&same), Err(BatchError::WouldOverwrite))),
        0.0,
    );

    // A suffix makes it safe
    let same = same.with_suffix("_4");
    let report = run(&same).expect("suffix run");
    rp.compare_values(3.0, report.written.len() as f64, 0.0);
    let thumb = read_image(dir.path().join("a_4.png")).expect("read thumb");
    let expected = scale_to_size(
        &synth::gradient(40, 20).expect("gradient"),
        4,
        4,
        ScaleMethod::Sampling,
        SizePolicy::Minimal,
    )
    .expect("scale");
    rp.compare_images(&expected, &thumb);

    // Missing directories are configuration errors
    let missing = dir.path().join("missing");
    let config = BatchConfig::new(&missing, dir.path(), TargetSize::pixels(4, 4));
    rp.compare_values(
        1.0,
        flag(matches!(run(&config), Err(BatchError::InvalidInputDir(_)))),
        0.0,
    );
    let config = BatchConfig::new(dir.path(), &missing, TargetSize::pixels(4, 4));
    rp.compare_values(
        1.0,
        flag(matches!(run(&config), Err(BatchError::InvalidOutputDir(_)))),
        0.0,
    );

    // An empty input directory is a successful no-op
    let empty = tempdir().expect("empty dir");
    let config = BatchConfig::new(empty.path(), dir.path(), TargetSize::pixels(4, 4));
    let report = run(&config).expect("empty run");
    rp.compare_values(1.0, flag(report.is_success() && report.written.is_empty()), 0.0);

    assert!(rp.cleanup(), "batch config regression test failed");
}

#[test]
fn batch_reg_output_collisions() {
    let mut rp = RegParams::new("batch_collisions");
    let input = tempdir().expect("input dir");
    let output = tempdir().expect("output dir");

    // Three inputs that all map to "a.png"; "a.PNG" sorts first
    let first = synth::gradient(8, 8).expect("gradient");
    write_image(&first, input.path().join("a.PNG"), ImageFormat::Png).expect("write a.PNG");
    let other = synth::gradient(12, 6).expect("gradient");
    write_image(&other, input.path().join("a.png"), ImageFormat::Png).expect("write a.png");
    write_image(&other, input.path().join("a.x.png"), ImageFormat::Png).expect("write a.x.png");

    let config = BatchConfig::new(input.path(), output.path(), TargetSize::pixels(4, 4));
    let report = run(&config).expect("batch run");
    rp.compare_values(1.0, report.written.len() as f64, 0.0);
    rp.compare_values(2.0, report.failures.len() as f64, 0.0);
    let collisions = report
        .failures
        .iter()
        .filter(|(_, e)| matches!(e, BatchError::OutputCollision(p) if p.ends_with("a.png")))
        .count();
    rp.compare_values(2.0, collisions as f64, 0.0);

    // The surviving output comes from the first input, not a later one
    let expected = scale_to_size(&first, 4, 4, ScaleMethod::Sampling, SizePolicy::Minimal)
        .expect("scale");
    let written = read_image(output.path().join("a.png")).expect("read output");
    rp.compare_images(&expected, &written);

    // In place, an output name may not replace a source file
    let dir = tempdir().expect("dir");
    let source = synth::gradient(10, 10).expect("gradient");
    write_image(&source, dir.path().join("a.png"), ImageFormat::Png).expect("write a");
    write_image(&source, dir.path().join("a_s.png"), ImageFormat::Png).expect("write a_s");
    let config =
        BatchConfig::new(dir.path(), dir.path(), TargetSize::pixels(4, 4)).with_suffix("_s");
    let report = run(&config).expect("in-place run");
    rp.compare_values(
        1.0,
        flag(matches!(
            report.failures.as_slice(),
            [(p, BatchError::OutputCollision(_))] if p.ends_with("a.png")
        )),
        0.0,
    );
    rp.compare_values(
        1.0,
        flag(report.written == [dir.path().join("a_s_s.png")]),
        0.0,
    );
    let kept = read_image(dir.path().join("a_s.png")).expect("read a_s");
    rp.compare_images(&source, &kept);

    assert!(rp.cleanup(), "batch collision regression test failed");
}
