/// The audits summarized under "Key Metrics", in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyMetric {
    FirstContentfulPaint,
    LargestContentfulPaint,
    TotalBlockingTime,
    CumulativeLayoutShift,
    SpeedIndex,
}

impl KeyMetric {
    pub const ALL: [KeyMetric; 5] = [
        KeyMetric::FirstContentfulPaint,
        KeyMetric::LargestContentfulPaint,
        KeyMetric::TotalBlockingTime,
        KeyMetric::CumulativeLayoutShift,
        KeyMetric::SpeedIndex,
    ];

    /// Audit key as it appears under `audits` in the report.
    pub const fn key(self) -> &'static str {
        match self {
            Self::FirstContentfulPaint => "first-contentful-paint",
            Self::LargestContentfulPaint => "largest-contentful-paint",
            Self::TotalBlockingTime => "total-blocking-time",
            Self::CumulativeLayoutShift => "cumulative-layout-shift",
            Self::SpeedIndex => "speed-index",
        }
    }
}
