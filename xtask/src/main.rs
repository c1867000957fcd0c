use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use halo_atomic::gen::{render, Descriptor, Manifest};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "halo-atomic workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one atomic cell
    GenCell {
        /// Name of the generated type (e.g. AtomicInt32)
        #[arg(long)]
        name: String,

        /// Wrapped value type (e.g. i32)
        #[arg(long)]
        wrapped: String,

        /// Zero value of the wrapped type (e.g. None)
        #[arg(long, default_value = "")]
        zero: String,

        /// The wrapped integer type is unsigned
        #[arg(long, default_value_t = false)]
        unsigned: bool,

        /// Store values behind a presence wrapper (implied by --zero None)
        #[arg(long, default_value_t = false)]
        nillable: bool,

        /// Path generated code uses to reach the library
        #[arg(long, default_value = "crate")]
        krate: String,

        /// Output file path (default: stdout)
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Regenerate every cell listed in the manifest
    Generate {
        /// Manifest listing the checked-in cells
        #[arg(long, default_value = "cells.json")]
        manifest: PathBuf,

        /// Fail instead of writing if any file is out of date
        #[arg(long, default_value_t = false)]
        check: bool,
    },
    /// Run the criterion benches
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::GenCell {
            name,
            wrapped,
            zero,
            unsigned,
            nillable,
            krate,
            file,
        } => {
            let mut descriptor = Descriptor::new(name, wrapped).zero(zero).krate(krate);
            if unsigned {
                descriptor = descriptor.unsigned();
            }
            if nillable {
                descriptor = descriptor.nillable(true);
            }
            gen_cell(&descriptor, file.as_deref())?;
        }
        Commands::Generate { manifest, check } => generate(&manifest, check)?,
        Commands::Bench { quick } => run_benchmarks(quick)?,
    }

    Ok(())
}

fn gen_cell(descriptor: &Descriptor, file: Option<&Path>) -> Result<()> {
    // Render before touching the output so a bad descriptor leaves no file behind.
    let src = render(descriptor).context("invalid cell descriptor")?;
    match file {
        Some(path) => {
            fs::write(path, src).with_context(|| format!("create {}", path.display()))?;
            println!("Wrote {} to {}", descriptor.name, path.display());
        }
        None => std::io::stdout().write_all(src.as_bytes())?,
    }
    Ok(())
}

fn generate(manifest_path: &Path, check: bool) -> Result<()> {
    let bytes = fs::read(manifest_path)
        .with_context(|| format!("read {}", manifest_path.display()))?;
    let manifest = Manifest::from_json(&bytes)?;
    let root = manifest_path.parent().unwrap_or_else(|| Path::new("."));

    // Render everything first: one bad entry must not leave a half-updated tree.
    let rendered = manifest
        .cells
        .iter()
        .map(|entry| {
            render(&entry.descriptor)
                .with_context(|| format!("render {}", entry.file.display()))
                .map(|src| (root.join(&entry.file), src))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut stale = Vec::new();
    for (path, src) in &rendered {
        let current = fs::read_to_string(path).unwrap_or_default();
        if current == *src {
            continue;
        }
        if check {
            stale.push(path.display().to_string());
            continue;
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, src).with_context(|| format!("write {}", path.display()))?;
        println!("Regenerated {}", path.display());
    }

    if !stale.is_empty() {
        bail!("generated cells are out of date: {}", stale.join(", "));
    }
    println!("{} cells up to date", rendered.len());
    Ok(())
}

fn run_benchmarks(quick: bool) -> Result<()> {
    println!("Running atomic benchmarks...");
    let start = Instant::now();

    let mut cmd = Command::new("cargo");
    cmd.args(["bench", "--bench", "atomic_benchmark"]);

    // Args for the test runner (Criterion) go after --
    cmd.arg("--");
    if quick {
        cmd.arg("--measurement-time").arg("0.1");
        cmd.arg("--noplot");
        cmd.arg("--sample-size").arg("10");
    }

    let status = cmd.status().context("Failed to run benchmarks")?;
    if !status.success() {
        bail!("Benchmarks failed");
    }
    println!("Finished in {:.2?}", start.elapsed());
    Ok(())
}
