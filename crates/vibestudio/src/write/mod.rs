use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use vibestudio_core::generation::{FileDescriptor, GenerationResult, WriteOutcome};
use vibestudio_core::workspace::{plan_writes, resolve_root};

#[derive(Debug, clap::Parser)]
#[command(name = "write")]
#[command(about = "Write generated files under a root directory")]
pub struct WriteOptions {
    /// Root directory; every file must resolve inside it
    pub root: PathBuf,

    /// JSON file with the files to write (reads stdin when omitted).
    /// Accepts an array of {path, content} or a {files, meta} object.
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(untagged)]
enum WriteInput {
    Files(Vec<FileDescriptor>),
    Generation(GenerationResult),
}

impl WriteInput {
    fn into_files(self) -> Vec<FileDescriptor> {
        match self {
            WriteInput::Files(files) => files,
            WriteInput::Generation(result) => result.files,
        }
    }
}

pub async fn run(options: WriteOptions, global: crate::Global) -> Result<()> {
    let raw = match &options.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read '{}'", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read files from stdin")?;
            buffer
        }
    };

    let files = serde_json::from_str::<WriteInput>(&raw)
        .context("Input is neither a list of files nor a generation result")?
        .into_files();

    if global.verbose {
        eprintln!(
            "Writing {} file(s) under {}",
            files.len(),
            options.root.display()
        );
    }

    let outcome = write_files(options.root.clone(), files).await?;

    println!(
        "{} {} file(s) under {}",
        "Wrote".green().bold(),
        outcome.written,
        options.root.display()
    );

    Ok(())
}

/// Write files on the blocking pool (for async callers).
pub async fn write_files(root: PathBuf, files: Vec<FileDescriptor>) -> Result<WriteOutcome, Error> {
    tokio::task::spawn_blocking(move || write_files_data(&root, &files))
        .await
        .map_err(|e| Error::Write(format!("Write task failed: {e}")))?
}

/// Write every descriptor under `root`.
///
/// All destinations are checked before the first write, so an escaping path
/// means nothing is written. A filesystem error aborts the loop: files written
/// before it stay on disk.
pub fn write_files_data(root: &Path, files: &[FileDescriptor]) -> Result<WriteOutcome, Error> {
    let cwd = std::env::current_dir()
        .map_err(|e| Error::Write(format!("Failed to resolve working directory: {e}")))?;
    let root = resolve_root(root, &cwd);

    let plan = plan_writes(&root, files)?;

    for planned in &plan {
        if let Some(parent) = planned.destination.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::Write(format!("{}: {e}", parent.display())))?;
        }

        fs::write(&planned.destination, &planned.file.content)
            .map_err(|e| Error::Write(format!("{}: {e}", planned.destination.display())))?;

        log::debug!("Wrote {}", planned.destination.display());
    }

    log::info!("Wrote {} file(s) under {}", plan.len(), root.display());

    Ok(WriteOutcome::ok(plan.len()))
}
