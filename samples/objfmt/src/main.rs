//! Reads OBJ files and writes their meshes back out in normalized form.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser as _;
use wavefront::{Mesh, Options, Parser};

mod cli;
use cli::Cli;

#[derive(Debug, thiserror::Error)]
enum Error {
    #[error("couldn't read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("{}:{source}", path.display())]
    Parse {
        path: PathBuf,
        source: wavefront::Error,
    },
    #[error(transparent)]
    Write(#[from] io::Error),
}

#[tracing::instrument(skip(options))]
fn load(path: &Path, options: Options) -> Result<Vec<Mesh>, Error> {
    let text = std::fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_owned(),
        source,
    })?;
    let mut meshes = Vec::new();
    for mesh in Parser::with_options(&text, options) {
        let mesh = mesh.map_err(|source| Error::Parse {
            path: path.to_owned(),
            source,
        })?;
        tracing::info!(name = mesh.name(), vertices = mesh.len(), "loaded mesh");
        meshes.push(mesh);
    }
    Ok(meshes)
}

fn run(cli: &Cli) -> Result<(), Error> {
    let options = cli.parse_options();
    let mut meshes = Vec::new();
    for path in &cli.files {
        meshes.extend(load(path, options)?);
    }
    if cli.check {
        tracing::info!(files = cli.files.len(), meshes = meshes.len(), "all inputs parsed");
        return Ok(());
    }

    let mut out: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    wavefront::write_to(&mut out, &meshes)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

pub fn main() -> ExitCode {
    let cli = Cli::parse();
    cli::initialize_tracing(&cli.log_filter, cli.log_format);
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
