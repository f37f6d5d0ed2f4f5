//! Plain-text rendering of a [`SimulationResult`].

use super::SimulationResult;

pub const GANTT_HEADER: &str = "Start -> End :: Process";
pub const GANTT_RULE: &str = "----------------------------------";

pub fn summary_line(result: &SimulationResult) -> String {
    format!(
        "Average Waiting Time (AWT): {:.2} | Average Turnaround Time (ATAT): {:.2}",
        result.average_waiting_time(),
        result.average_turnaround_time()
    )
}

/// One row per block, in the order the scheduler produced them.
pub fn gantt_rows(result: &SimulationResult) -> Vec<String> {
    result
        .gantt_chart()
        .iter()
        .map(|block| {
            format!(
                "  {} -> {}  :: {}",
                block.start(),
                block.end(),
                block.process_name()
            )
        })
        .collect()
}

pub fn gantt_text(result: &SimulationResult) -> String {
    let mut text = format!("{GANTT_HEADER}\n{GANTT_RULE}\n");
    for row in gantt_rows(result) {
        text.push_str(&row);
        text.push('\n');
    }
    text
}

pub const TABLE_HEADER: [&str; 6] = [
    "Process",
    "Arrival",
    "Burst",
    "Completion",
    "Turnaround",
    "Waiting",
];

pub fn process_table(result: &SimulationResult) -> String {
    let name_width = result
        .final_processes()
        .iter()
        .map(|process| process.name().chars().count())
        .chain([TABLE_HEADER[0].len()])
        .max()
        .unwrap_or_default();

    let mut table = format!(
        "{:<name_width$} | {:>7} | {:>5} | {:>10} | {:>10} | {:>7}\n",
        TABLE_HEADER[0],
        TABLE_HEADER[1],
        TABLE_HEADER[2],
        TABLE_HEADER[3],
        TABLE_HEADER[4],
        TABLE_HEADER[5],
    );
    for process in result.final_processes() {
        table.push_str(&format!(
            "{:<name_width$} | {:>7} | {:>5} | {:>10} | {:>10} | {:>7}\n",
            process.name(),
            process.arrival_time(),
            process.burst_time(),
            process.completion_time(),
            process.turnaround_time(),
            process.waiting_time(),
        ));
    }
    table
}

pub fn render(result: &SimulationResult) -> String {
    format!(
        "{}\n{}\n\n{}",
        process_table(result),
        summary_line(result),
        gantt_text(result)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{Algorithm, Process};
    use pretty_assertions::assert_eq;

    fn result() -> SimulationResult {
        let processes = vec![Process::new("A", 0, 4), Process::new("B", 1, 2)];
        Algorithm::Standard.simulate(&processes, 2).unwrap()
    }

    #[test]
    fn test_summary_line() {
        assert_eq!(
            summary_line(&result()),
            "Average Waiting Time (AWT): 1.50 | Average Turnaround Time (ATAT): 4.50"
        );
    }

    #[test]
    fn test_gantt_text() {
        assert_eq!(
            gantt_text(&result()),
            "Start -> End :: Process\n\
             ----------------------------------\n  \
             0 -> 2  :: A\n  \
             2 -> 4  :: B\n  \
             4 -> 6  :: A\n"
        );
    }

    #[test]
    fn test_process_table() {
        let table = process_table(&result());
        let lines: Vec<_> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "Process | Arrival | Burst | Completion | Turnaround | Waiting"
        );
        assert_eq!(
            lines[1],
            "A       |       0 |     4 |          6 |          6 |       2"
        );
    }

    #[test]
    fn test_process_table_aligns_non_ascii_names() {
        let processes = vec![Process::new("Prozeß-Ä", 0, 1), Process::new("B", 0, 1)];
        let result = Algorithm::Standard.simulate(&processes, 1).unwrap();
        let table = process_table(&result);

        let separators: Vec<_> = table
            .lines()
            .map(|line| line.chars().position(|c| c == '|'))
            .collect();
        assert_eq!(separators, [Some(9), Some(9), Some(9)]);
    }

    #[test]
    fn test_empty_result_renders_header_only() {
        let empty = Algorithm::Enhanced.simulate(&[], 1).unwrap();
        assert_eq!(gantt_text(&empty), format!("{GANTT_HEADER}\n{GANTT_RULE}\n"));
        assert_eq!(process_table(&empty).lines().count(), 1);
    }
}
