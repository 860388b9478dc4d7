use std::time::Duration;

/// Totals for one run, produced when the loop finishes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SendStats {
    pub datagrams_sent: u64,
    pub bytes_sent: u64,
    pub elapsed: Duration,
}

impl SendStats {
    /// Unguarded: an empty run over a zero elapsed time yields NaN.
    pub fn rate_per_sec(&self) -> f64 {
        self.datagrams_sent as f64 / self.elapsed.as_secs_f64()
    }

    pub fn summary(&self, report_rate: bool) -> String {
        if report_rate {
            format!(
                "SENT {} events at {:.2} events/s",
                self.datagrams_sent,
                self.rate_per_sec()
            )
        } else {
            format!("SENT {} events", self.datagrams_sent)
        }
    }
}
