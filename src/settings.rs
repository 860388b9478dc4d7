use crate::error::FeedError;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_DEST: &str = "localhost:10666";
pub const PACED_DELAY: Duration = Duration::from_micros(300);

#[derive(Debug, Clone, PartialEq)]
pub struct FeedSettings {
    pub path: PathBuf,
    pub dest: String,
    pub pacing: Option<Duration>,
    pub report_rate: bool,
    /// Trim trailing whitespace from the `sending:` display string.
    pub trim_display: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Parsed {
    Run(FeedSettings),
    Help,
}

impl FeedSettings {
    /// As fast as the loop goes, count only.
    pub fn plain() -> Self {
        Self {
            path: PathBuf::new(),
            dest: DEFAULT_DEST.to_string(),
            pacing: None,
            report_rate: false,
            trim_display: false,
        }
    }

    /// Fixed 300µs between sends, reports the average rate.
    pub fn paced() -> Self {
        Self { pacing: Some(PACED_DELAY), report_rate: true, trim_display: true, ..Self::plain() }
    }

    /// Applies program arguments (without argv[0]) on top of a preset.
    ///
    /// The input path is always the last argument. Unknown leading
    /// arguments are ignored; `-h`/`--help` only counts on its own.
    pub fn from_args<I, S>(preset: Self, args: I) -> Result<Parsed, FeedError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        if let [only] = args.as_slice() {
            if only == "-h" || only == "--help" {
                return Ok(Parsed::Help);
            }
        }
        let (path, leading) = args.split_last().ok_or(FeedError::MissingPath)?;

        let mut settings = Self { path: PathBuf::from(path), ..preset };
        let mut it = leading.iter();
        while let Some(arg) = it.next() {
            match arg.as_str() {
                "--dest" => {
                    let v = it
                        .next()
                        .ok_or_else(|| FeedError::invalid_option(arg, "expected HOST:PORT"))?;
                    settings.dest = v.clone();
                }
                "--delay-us" => {
                    let v = it
                        .next()
                        .ok_or_else(|| FeedError::invalid_option(arg, "expected microseconds"))?;
                    let us: u64 = v
                        .parse()
                        .map_err(|e| FeedError::invalid_option(arg, format!("{v:?}: {e}")))?;
                    settings.pacing = Some(Duration::from_micros(us));
                }
                "--no-delay" => settings.pacing = None,
                "--rate" => settings.report_rate = true,
                other => log::debug!("ignoring argument {other:?}"),
            }
        }
        Ok(Parsed::Run(settings))
    }
}

pub fn usage(prog: &str) -> String {
    format!(
        "Usage: {prog} [--dest HOST:PORT] [--delay-us N | --no-delay] [--rate] <file>\n\
         Sends each line of <file> as one UDP datagram (default {DEFAULT_DEST})."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(preset: FeedSettings, args: &[&str]) -> FeedSettings {
        match FeedSettings::from_args(preset, args.iter().copied()).unwrap() {
            Parsed::Run(s) => s,
            Parsed::Help => panic!("unexpected help"),
        }
    }

    #[test]
    fn no_arguments_is_missing_path() {
        let err = FeedSettings::from_args(FeedSettings::plain(), Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, FeedError::MissingPath));
    }

    #[test]
    fn path_is_the_last_argument() {
        let s = run(FeedSettings::plain(), &["whatever", "extra", "events.txt"]);
        assert_eq!(s.path, PathBuf::from("events.txt"));
        assert_eq!(s.dest, DEFAULT_DEST);
        assert_eq!(s.pacing, None);
        assert!(!s.report_rate);
    }

    #[test]
    fn paced_preset_defaults() {
        let s = run(FeedSettings::paced(), &["events.txt"]);
        assert_eq!(s.pacing, Some(Duration::from_micros(300)));
        assert!(s.report_rate);
        assert!(s.trim_display);
    }

    #[test]
    fn options_override_the_preset() {
        let s = run(
            FeedSettings::plain(),
            &["--dest", "127.0.0.1:9000", "--delay-us", "50", "--rate", "in.txt"],
        );
        assert_eq!(s.dest, "127.0.0.1:9000");
        assert_eq!(s.pacing, Some(Duration::from_micros(50)));
        assert!(s.report_rate);

        let s = run(FeedSettings::paced(), &["--no-delay", "in.txt"]);
        assert_eq!(s.pacing, None);
    }

    #[test]
    fn option_missing_its_value() {
        let err = FeedSettings::from_args(FeedSettings::plain(), ["--dest", "in.txt"]).unwrap_err();
        assert!(matches!(err, FeedError::InvalidOption { .. }));

        let err =
            FeedSettings::from_args(FeedSettings::plain(), ["--delay-us", "soon", "in.txt"]).unwrap_err();
        assert!(matches!(err, FeedError::InvalidOption { .. }));
    }

    #[test]
    fn help_alone_shows_usage() {
        assert_eq!(FeedSettings::from_args(FeedSettings::plain(), ["--help"]).unwrap(), Parsed::Help);
        assert_eq!(FeedSettings::from_args(FeedSettings::plain(), ["-h"]).unwrap(), Parsed::Help);
    }

    #[test]
    fn help_before_a_path_is_ignored() {
        let s = run(FeedSettings::plain(), &["-h", "events.txt"]);
        assert_eq!(s.path, PathBuf::from("events.txt"));
        let s = run(FeedSettings::paced(), &["--help", "x", "events.txt"]);
        assert_eq!(s.path, PathBuf::from("events.txt"));
    }
}
