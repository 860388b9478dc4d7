use anyhow::Result;
use line_feed::settings::usage;
use line_feed::{feed_file, FeedSettings, Parsed};
use std::env;
use std::io;

// Same feed as `feedudp`, with 300µs between sends and a rate in the summary.
fn main() -> Result<()> {
  env_logger::init();

  let mut args = env::args();
  let prog = args.next().unwrap_or_else(|| "feedudp_paced".into());
  let settings = match FeedSettings::from_args(FeedSettings::paced(), args)? {
    Parsed::Run(s) => s,
    Parsed::Help => {
      eprintln!("{}", usage(&prog));
      return Ok(());
    }
  };

  feed_file(&settings, io::stdout().lock())?;
  Ok(())
}
