//! `portscope search` - Search the banner index.

use anyhow::Result;
use tracing::debug;

use super::Context;
use crate::cli::args::SearchArgs;
use crate::output::{self, pager, Palette, RowFormat};

pub async fn execute(ctx: Context, args: SearchArgs) -> Result<()> {
    let query = args.query.join(" ");
    let fields = output::parse_fields(&args.fields)?;

    let client = ctx.client()?;
    let results = client
        .search()
        .query(query)
        .limit(args.limit)
        .send()
        .await?;

    debug!(total = results.total, fetched = results.len(), "search completed");

    if results.total == 0 {
        anyhow::bail!("No search results found");
    }

    let colorize = args.colorize() && console::user_attended();
    let format = RowFormat {
        separator: args.separator,
        colorize,
        palette: Palette::default(),
    };

    let buffer = output::collect_rows(&results.matches, &fields, &format);
    pager::page_or_print(&buffer)?;

    Ok(())
}
