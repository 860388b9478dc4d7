use anyhow::Result;
use line_feed::settings::usage;
use line_feed::{feed_file, FeedSettings, Parsed};
use std::env;
use std::io;

fn main() -> Result<()> {
  // RUST_LOG controls diagnostics on stderr; stdout carries the feed log
  env_logger::init();

  let mut args = env::args();
  let prog = args.next().unwrap_or_else(|| "feedudp".into());
  let settings = match FeedSettings::from_args(FeedSettings::plain(), args)? {
    Parsed::Run(s) => s,
    Parsed::Help => {
      eprintln!("{}", usage(&prog));
      return Ok(());
    }
  };

  feed_file(&settings, io::stdout().lock())?;
  Ok(())
}
