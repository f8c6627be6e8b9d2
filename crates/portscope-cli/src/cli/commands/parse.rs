//! `portscope parse` - Render a downloaded banner file offline.

use anyhow::Result;

use crate::cli::args::ParseArgs;
use crate::files::BannerFile;
use crate::output::{self, Palette, RowFormat};

pub fn execute(args: ParseArgs) -> Result<()> {
    if !args.filename.ends_with(".json") && !args.filename.ends_with(".json.gz") {
        anyhow::bail!("the file must be a .json or .json.gz file");
    }

    let fields = output::parse_fields(&args.fields)?;

    let colorize = args.colorize() && console::user_attended();
    let format = RowFormat {
        separator: args.separator,
        colorize,
        palette: Palette::default(),
    };

    let records = BannerFile::open(&args.filename)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    output::stream_rows(records, &fields, &format, &mut out)
}
