//! `portscope init` - Store the API key.

use anyhow::Result;
use colored::Colorize;

use crate::cli::args::InitArgs;
use crate::config::KeyFile;

pub fn execute(args: InitArgs) -> Result<()> {
    let key = args.key.trim();
    if key.is_empty() {
        anyhow::bail!("the API key must not be empty");
    }

    let file = KeyFile::default_location()?;
    file.save(key)?;

    println!("{}", "Successfully initialized".green());
    Ok(())
}
