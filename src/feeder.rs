use crate::ascii;
use crate::error::FeedError;
use crate::lines;
use crate::pacing::{boost_current_thread_priority, Pacer};
use crate::send_stats::SendStats;
use crate::settings::FeedSettings;
use crate::sink::{DatagramSink, UdpSink};
use std::io::Write;
use std::time::Instant;

/// The send loop: one line in, one `sending:` log line out, one datagram sent.
pub struct Feeder<S, W> {
    sink: S,
    out: W,
    pacer: Pacer,
    trim_display: bool,
}

impl<S: DatagramSink, W: Write> Feeder<S, W> {
    pub fn new(sink: S, out: W, pacer: Pacer, trim_display: bool) -> Self {
        Self { sink, out, pacer, trim_display }
    }

    /// Sends every line in order and stops at the first error.
    ///
    /// Datagrams sent before an error are not taken back.
    pub fn run<I>(&mut self, lines: I) -> Result<SendStats, FeedError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut datagrams_sent = 0u64;
        let mut bytes_sent = 0u64;

        let start = Instant::now();
        for (idx, line) in lines.into_iter().enumerate() {
            let payload = ascii::encode_line(line.as_ref(), idx + 1)?;

            writeln!(self.out, "sending: {}", ascii::display(payload, self.trim_display))
                .map_err(FeedError::Output)?;
            let n = self.sink.send(payload).map_err(FeedError::Transport)?;
            datagrams_sent += 1;
            bytes_sent += n as u64;
            log::trace!("datagram {} ({} bytes)", datagrams_sent, n);

            self.pacer.pace();
        }
        let elapsed = start.elapsed();

        Ok(SendStats { datagrams_sent, bytes_sent, elapsed })
    }

    pub fn into_parts(self) -> (S, W) {
        (self.sink, self.out)
    }
}

/// Runs a whole feed: read the file, bind the socket, send, print the summary.
///
/// The file is read and decoded in full before the first send.
pub fn feed_file<W: Write>(settings: &FeedSettings, out: W) -> Result<SendStats, FeedError> {
    let lines = lines::open(&settings.path)?;
    let sink = UdpSink::connect(&settings.dest)?;
    log::info!(
        "feeding {} lines from {} to {} (delay: {:?})",
        lines.len(),
        settings.path.display(),
        sink.dest(),
        settings.pacing
    );

    if settings.pacing.is_some() {
        boost_current_thread_priority();
    }

    let mut feeder = Feeder::new(sink, out, Pacer::new(settings.pacing), settings.trim_display);
    let stats = feeder.run(&lines)?;

    let (_sink, mut out) = feeder.into_parts();
    writeln!(out, "{}", stats.summary(settings.report_rate)).map_err(FeedError::Output)?;
    out.flush().map_err(FeedError::Output)?;
    log::info!("done: {} datagrams, {} bytes in {:?}", stats.datagrams_sent, stats.bytes_sent, stats.elapsed);
    Ok(stats)
}
