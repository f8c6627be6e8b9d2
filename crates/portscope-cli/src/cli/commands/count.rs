//! `portscope count` - Count matches without fetching them.

use anyhow::Result;

use super::Context;
use crate::cli::args::CountArgs;

pub async fn execute(ctx: Context, args: CountArgs) -> Result<()> {
    let query = args.query.join(" ");

    let client = ctx.client()?;
    let results = client.search().count(query).send().await?;

    println!("{}", results.total);
    Ok(())
}
