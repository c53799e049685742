//! Resize every PNG in a directory.
//!
//! ```text
//! resize_batch -i photos -o thumbs --width-percent 25 --height-percent 25 -m bilinear --suffix _small
//! ```

use argh::FromArgs;
use log::error;
use resizer::batch::{BatchConfig, run_with_progress};
use resizer::transform::{ScaleMethod, SizePolicy, TargetSize};
use std::path::PathBuf;

#[derive(FromArgs)]
/// Resize all PNG images in a directory
struct Args {
    /// directory containing the source PNG files
    #[argh(option, short = 'i')]
    input: PathBuf,

    /// directory the resized files are written to
    #[argh(option, short = 'o')]
    output: PathBuf,

    /// prefix added to every output file name
    #[argh(option, default = "String::new()")]
    prefix: String,

    /// suffix added to every output file name, before the extension
    #[argh(option, default = "String::new()")]
    suffix: String,

    /// target width in pixels
    #[argh(option)]
    width: Option<i64>,

    /// target height in pixels
    #[argh(option)]
    height: Option<i64>,

    /// target width in percent of the source width
    #[argh(option)]
    width_percent: Option<f32>,

    /// target height in percent of the source height
    #[argh(option)]
    height_percent: Option<f32>,

    /// interpolation: nearest, bilinear, bicubic (default: nearest)
    #[argh(option, short = 'm', default = "ScaleMethod::Sampling")]
    method: ScaleMethod,

    /// largest accepted output dimension (default: unbounded)
    #[argh(option)]
    max_dimension: Option<u32>,
}

fn target_from_args(args: &Args) -> Result<TargetSize, String> {
    match (args.width, args.height, args.width_percent, args.height_percent) {
        (Some(w), Some(h), None, None) => Ok(TargetSize::pixels(w, h)),
        (None, None, Some(wp), Some(hp)) => Ok(TargetSize::percent(wp, hp)),
        _ => Err(
            "give either --width and --height, or --width-percent and --height-percent".to_string(),
        ),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();
    let target = target_from_args(&args)?;

    let config = BatchConfig::new(&args.input, &args.output, target)
        .with_prefix(args.prefix.as_str())
        .with_suffix(args.suffix.as_str())
        .with_method(args.method)
        .with_policy(SizePolicy::with_max(args.max_dimension));

    let report = run_with_progress(&config, |done, total| {
        log::debug!("{}/{}", done, total);
    })?;

    for (path, e) in &report.failures {
        error!("failed: {} ({})", path.display(), e);
    }
    if !report.is_success() {
        return Err(format!(
            "{} of {} image(s) failed",
            report.failures.len(),
            report.failures.len() + report.written.len()
        )
        .into());
    }
    Ok(())
}
