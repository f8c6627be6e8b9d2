//! `portscope myip` - Show your public IP address.

use anyhow::Result;

use super::Context;

pub async fn execute(ctx: Context) -> Result<()> {
    let client = ctx.client()?;
    let ip = client.tools().my_ip().await?;

    println!("{}", ip.as_str());
    Ok(())
}
