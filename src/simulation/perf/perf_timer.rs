/// Wall-clock milliseconds; `Date.now()` in the browser, a process-wide
/// `Instant` origin natively.
#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static ORIGIN: OnceLock<Instant> = OnceLock::new();
    ORIGIN.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}

/// Stopwatch that only reads the clock while perf metrics are on.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PerfTimer {
    started_ms: Option<f64>,
}

impl PerfTimer {
    pub(crate) fn new(enabled: bool) -> Self {
        Self { started_ms: enabled.then(now_ms) }
    }

    /// `None` when the timer was created with metrics off.
    pub(crate) fn elapsed_ms(&self) -> Option<f64> {
        self.started_ms.map(|start| (now_ms() - start).max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_timer_reads_nothing() {
        assert_eq!(PerfTimer::new(false).elapsed_ms(), None);
    }

    #[test]
    fn enabled_timer_is_monotonic() {
        let timer = PerfTimer::new(true);
        let first = timer.elapsed_ms().unwrap();
        let second = timer.elapsed_ms().unwrap();
        assert!(first >= 0.0);
        assert!(second >= first);
    }
}
