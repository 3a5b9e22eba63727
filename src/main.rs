//! script-voice-rs CLI entry point.

use std::io::Write;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, error, info, warn};
use script_voice_rs::backend::{Backend, create_backend};
use script_voice_rs::cli::Args;
use script_voice_rs::engine::Generator;
use script_voice_rs::manifest::{annotate_durations, load_manifest, remove_segment, write_manifest};

fn main() {
    let args = Args::parse();

    // Progress goes to stderr as plain lines; RUST_LOG still overrides the level.
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| match record.level() {
            log::Level::Info => writeln!(buf, "{}", record.args()),
            level => writeln!(buf, "{level}: {}", record.args()),
        })
        .init();

    if let Err(e) = run(&args) {
        error!("{e:#}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    // Manifest editing commands first
    if let Some(index) = args.remove_segment {
        return remove_from_manifest(args, index);
    }

    if args.update_durations {
        return update_durations(args);
    }

    generate(args)
}

fn generate(args: &Args) -> Result<()> {
    let config = args.generator_config();
    let backend = create_backend(&config.base_url).context("Failed to set up HTTP client")?;

    match backend.version() {
        Ok(version) => info!("Engine {} (version {version})", backend.base_url()),
        Err(e) => warn!("Engine at {} did not answer: {e}", backend.base_url()),
    }

    let generator = Generator::new(backend, config);
    let report = generator
        .run(&args.input)
        .with_context(|| format!("Failed to generate audio for {}", args.input.display()))?;

    println!("{}", "-".repeat(50));
    println!(
        "Done: generated {} of {} audio files",
        report.generated.len(),
        report.segment_count
    );
    println!("Output directory: {}", report.output_dir.display());
    if report.manifest_error.is_none() {
        println!("Manifest: {}", report.manifest_path.display());
    }

    if !report.failures.is_empty() {
        let indices: Vec<String> = report
            .failures
            .iter()
            .map(|f| f.index.to_string())
            .collect();
        println!("Failed segments: {}", indices.join(", "));
    }

    if let Some(e) = report.manifest_error {
        return Err(e).with_context(|| {
            format!("Failed to write manifest: {}", report.manifest_path.display())
        });
    }

    Ok(())
}

fn update_durations(args: &Args) -> Result<()> {
    let manifest_path = args.manifest_path();
    let mut entries = load_manifest(&manifest_path)
        .with_context(|| format!("Failed to load manifest: {}", manifest_path.display()))?;

    let timeline = args.timeline();
    let total_frames = annotate_durations(&mut entries, &args.output_dir, timeline);

    write_manifest(&manifest_path, &entries)
        .with_context(|| format!("Failed to write manifest: {}", manifest_path.display()))?;

    println!("Manifest updated: {}", manifest_path.display());
    println!("  Total frames: {total_frames}");
    println!("  Total duration: {:.1}s", timeline.seconds_for(total_frames));

    Ok(())
}

fn remove_from_manifest(args: &Args, index: usize) -> Result<()> {
    let manifest_path = args.manifest_path();
    let mut entries = load_manifest(&manifest_path)
        .with_context(|| format!("Failed to load manifest: {}", manifest_path.display()))?;

    let removed = remove_segment(&mut entries, index, args.gap_frames)
        .with_context(|| format!("Failed to remove segment {index}"))?;

    write_manifest(&manifest_path, &entries)
        .with_context(|| format!("Failed to write manifest: {}", manifest_path.display()))?;

    println!("Removed segment {}: \"{}\"", removed.index, removed.text);
    if let (Some(start), Some(end)) = (removed.start_frame, removed.end_frame) {
        println!("  Frames: {start} - {end}");
    }
    println!("Remaining segments: {}", entries.len());

    Ok(())
}
