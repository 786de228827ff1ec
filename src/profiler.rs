use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use std::time::{Duration, Instant};

/// Collects wall-clock samples for one named operation.
#[derive(Debug, Clone)]
pub struct Profiler {
    name: String,
    samples: Vec<Duration>,
}

impl Profiler {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            samples: Vec::new(),
        }
    }

    /// Runs `f`, records how long it took and returns its result.
    pub fn time<T>(&mut self, f: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let result = f();
        self.record(start.elapsed());
        result
    }

    pub fn record(&mut self, elapsed: Duration) {
        self.samples.push(elapsed);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn samples(&self) -> usize {
        self.samples.len()
    }

    pub fn min(&self) -> Option<Duration> {
        self.samples.iter().min().copied()
    }

    pub fn max(&self) -> Option<Duration> {
        self.samples.iter().max().copied()
    }

    pub fn average(&self) -> Option<Duration> {
        if self.samples.is_empty() {
            return None;
        }
        let total: Duration = self.samples.iter().sum();
        Some(total / self.samples.len() as u32)
    }

    /// Report table with sample count and min/max/average in seconds
    pub fn report(&self) -> String {
        let secs = |d: Option<Duration>| {
            d.map(|d| format!("{:.9}", d.as_secs_f64()))
                .unwrap_or_else(|| "-".to_string())
        };

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec!["Function", "NumSamples", "Min", "Max", "Average"]);
        table.add_row(vec![
            self.name().to_string(),
            self.samples().to_string(),
            secs(self.min()),
            secs(self.max()),
            secs(self.average()),
        ]);

        format!("\n=== Function profiler report ===\n\n{table}\n")
    }
}
