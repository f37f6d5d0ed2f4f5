use super::Time;
use serde::Serialize;

/// One contiguous stretch of CPU time given to a process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GanttBlock {
    process_name: String,
    start: Time,
    end: Time,
}

impl GanttBlock {
    pub fn process_name(&self) -> &str {
        &self.process_name
    }

    pub fn start(&self) -> Time {
        self.start
    }

    pub fn end(&self) -> Time {
        self.end
    }

    pub fn duration(&self) -> Time {
        self.end - self.start
    }
}

/// Append-only execution log. Idle time is never recorded, so gaps may
/// appear between consecutive blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GanttChart {
    blocks: Vec<GanttBlock>,
}

impl GanttChart {
    pub fn new() -> Self {
        Self::default()
    }

    pub(super) fn record(&mut self, process_name: &str, start: Time, end: Time) {
        debug_assert!(start < end, "empty slice for {process_name}");
        debug_assert!(
            self.blocks.last().map_or(true, |last| last.end <= start),
            "slice for {process_name} overlaps the previous block"
        );

        self.blocks.push(GanttBlock {
            process_name: process_name.to_owned(),
            start,
            end,
        });
    }

    pub fn blocks(&self) -> &[GanttBlock] {
        &self.blocks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GanttBlock> {
        self.blocks.iter()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Total CPU time the named process received.
    pub fn time_for(&self, process_name: &str) -> Time {
        self.blocks
            .iter()
            .filter(|block| block.process_name == process_name)
            .map(GanttBlock::duration)
            .sum()
    }
}

impl<'a> IntoIterator for &'a GanttChart {
    type Item = &'a GanttBlock;
    type IntoIter = std::slice::Iter<'a, GanttBlock>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocks_keep_recording_order() {
        let mut chart = GanttChart::new();
        chart.record("P1", 0, 3);
        chart.record("P2", 3, 5);
        chart.record("P1", 8, 9);

        let names: Vec<_> = chart.iter().map(GanttBlock::process_name).collect();
        assert_eq!(names, ["P1", "P2", "P1"]);
        assert_eq!(chart.len(), 3);
        assert_eq!(chart.blocks()[2].start(), 8);
    }

    #[test]
    fn test_time_for_sums_every_slice() {
        let mut chart = GanttChart::new();
        chart.record("P1", 0, 3);
        chart.record("P2", 3, 5);
        chart.record("P1", 5, 9);

        assert_eq!(chart.time_for("P1"), 7);
        assert_eq!(chart.time_for("P2"), 2);
        assert_eq!(chart.time_for("P9"), 0);
    }

    #[test]
    fn test_serializes_as_plain_list() {
        let mut chart = GanttChart::new();
        chart.record("P1", 0, 2);

        let json = serde_json::to_string(&chart).unwrap();
        assert_eq!(json, r#"[{"process_name":"P1","start":0,"end":2}]"#);
    }
}
