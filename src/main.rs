use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use objnormals::wavefront_obj::{rebuild_normals, OutputFormat, RebuildSummary};

/// Recomputes the vertex normals of a Wavefront OBJ file
#[derive(Parser, Debug)]
#[command(name = "objnormals", version, about)]
struct Cli {
    /// OBJ file to read
    input: PathBuf,

    /// File to write; Must not exist yet
    output: PathBuf,

    /// Write a zip archive containing the OBJ document instead of a plain OBJ file
    #[cfg(feature = "archive")]
    #[arg(long)]
    archive: bool,

    /// Log progress; Overridden by RUST_LOG
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn output_format(&self) -> OutputFormat {
        #[cfg(feature = "archive")]
        if self.archive {
            return OutputFormat::Archive;
        }
        OutputFormat::Obj
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_writer(std::io::stderr)
        .init();

    let start = Instant::now();
    match rebuild_normals(&cli.input, &cli.output, cli.output_format()) {
        Ok(summary) => {
            print_summary(&summary);
            println!("Done in {} ms", start.elapsed().as_millis());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn print_summary(summary: &RebuildSummary) {
    println!("Parsing finished in {} ms", summary.parse_time.as_millis());
    println!("Number of coordinates: {}", summary.vertices);
    if summary.input_normals > 0 {
        println!("The input already contained {} normals (vn); New ones were calculated", summary.input_normals);
    }
    println!("Number of texture coordinates: {}", summary.tex_coords);
    println!("Number of faces: {}", summary.faces);
    println!("Number of triangles: {} ({} written, {} degenerate left out)",
             summary.triangles, summary.written.triangles_written, summary.written.triangles_omitted);
    if summary.normals.zero_normal_vertices > 0 {
        println!("Vertices without normal: {}", summary.normals.zero_normal_vertices);
    }
    for (record_tag, count) in &summary.ignored_records {
        println!("Ignored \"{}\" records: {}", record_tag, count);
    }
    if let Some(bounds) = summary.bounding_box {
        let [min_x, min_y, min_z] = bounds.min.to_array();
        let [max_x, max_y, max_z] = bounds.max.to_array();
        println!("Bounding box = min ({}, {}, {}) - max ({}, {}, {})", min_x, min_y, min_z, max_x, max_y, max_z);
    }
}
