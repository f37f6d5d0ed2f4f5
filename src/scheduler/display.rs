use super::{report, runner::RunnerEvent, Algorithm, SimulationError, SimulationResult, Time};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::{
    io::{self, Stdout},
    sync::mpsc::{self, Receiver},
    thread,
    time::{Duration, Instant},
};
use tui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table},
    Terminal,
};

pub enum DisplayEvent {
    Input(KeyEvent),
    Tick,
}

const TICK_RATE: Duration = Duration::from_millis(200);

pub struct DisplayTerminal {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    input_rx: Receiver<DisplayEvent>,
}

impl DisplayTerminal {
    pub fn new() -> Result<Self, io::Error> {
        crossterm::terminal::enable_raw_mode()?;

        // Set up the input handling thread
        let (input_tx, input_rx) = mpsc::channel();
        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = TICK_RATE
                    .checked_sub(last_tick.elapsed())
                    .unwrap_or(Duration::ZERO);

                match event::poll(timeout) {
                    Ok(true) => {
                        if let Ok(Event::Key(key)) = event::read() {
                            if input_tx.send(DisplayEvent::Input(key)).is_err() {
                                break;
                            }
                        }
                    }
                    Ok(false) => {}
                    Err(_) => break,
                }

                if last_tick.elapsed() >= TICK_RATE {
                    if input_tx.send(DisplayEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        // Set up the terminal-user-interface
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(Self { terminal, input_rx })
    }

    pub fn draw(
        &mut self,
        algorithm: Algorithm,
        quantum: Time,
        outcome: &Result<SimulationResult, SimulationError>,
    ) -> Result<(), io::Error> {
        self.terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .margin(1)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Length(3),
                    Constraint::Min(5),
                ])
                .split(f.size());

            let settings = Paragraph::new(format!(
                "{} | Quantum: {} | [a] switch algorithm  [+/-] quantum  [q] quit",
                algorithm.name(),
                quantum
            ))
            .style(
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .fg(Color::LightBlue),
            )
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Simulation")
                    .border_type(BorderType::Rounded),
            );

            f.render_widget(settings, chunks[0]);

            let result = match outcome {
                Ok(result) => result,
                Err(err) => {
                    let status = Paragraph::new(err.to_string())
                        .style(Style::default().fg(Color::LightRed))
                        .block(Block::default().borders(Borders::ALL).title("Error"));
                    f.render_widget(status, chunks[1]);
                    return;
                }
            };

            let summary = Paragraph::new(report::summary_line(result))
                .style(Style::default().add_modifier(Modifier::BOLD))
                .block(Block::default().borders(Borders::ALL).title("Averages"));

            f.render_widget(summary, chunks[1]);

            let body = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(chunks[2]);

            let items = result.final_processes().iter().map(|process| {
                Row::new(vec![
                    Cell::from(process.name().to_owned())
                        .style(Style::default().add_modifier(Modifier::BOLD)),
                    Cell::from(process.arrival_time().to_string()),
                    Cell::from(process.burst_time().to_string()),
                    Cell::from(process.completion_time().to_string()),
                    Cell::from(process.turnaround_time().to_string()),
                    Cell::from(process.waiting_time().to_string()),
                ])
            });

            let table = Table::new(items)
                .header(
                    Row::new(report::TABLE_HEADER.to_vec())
                        .style(Style::default().add_modifier(Modifier::BOLD)),
                )
                .widths(&[
                    Constraint::Length(10),
                    Constraint::Length(8),
                    Constraint::Length(6),
                    Constraint::Length(11),
                    Constraint::Length(11),
                    Constraint::Length(8),
                ])
                .block(Block::default().title("Results").borders(Borders::ALL))
                .style(Style::default().fg(Color::LightGreen))
                .column_spacing(1);

            f.render_widget(table, body[0]);

            let gantt = Paragraph::new(report::gantt_text(result))
                .block(Block::default().title("Gantt Chart").borders(Borders::ALL));

            f.render_widget(gantt, body[1]);
        })?;
        Ok(())
    }

    pub fn get_input(&self) -> RunnerEvent {
        // The input thread only goes away when the terminal does
        let Ok(event) = self.input_rx.recv() else {
            return RunnerEvent::Quit;
        };

        if let DisplayEvent::Input(key) = event {
            if (key.modifiers - KeyModifiers::SHIFT).is_empty() {
                match key.code {
                    KeyCode::Char('q') => return RunnerEvent::Quit,
                    KeyCode::Char('a') => return RunnerEvent::SwitchAlgorithm,
                    KeyCode::Char('+') | KeyCode::Char('=') => return RunnerEvent::IncreaseQuantum,
                    KeyCode::Char('-') => return RunnerEvent::DecreaseQuantum,
                    _ => {}
                };
            }
        }
        RunnerEvent::None
    }
}

impl Drop for DisplayTerminal {
    fn drop(&mut self) {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = self.terminal.show_cursor();
    }
}
