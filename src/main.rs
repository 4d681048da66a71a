use std::path::PathBuf;

use anyhow::bail;
use fablabbox::{generate_from_file, init_logging, render_json};

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) else {
        bail!("usage: fablabbox <request.json|request.toml>");
    };

    let shapes = generate_from_file(&path)?;
    println!("{}", render_json(&shapes)?);

    Ok(())
}
