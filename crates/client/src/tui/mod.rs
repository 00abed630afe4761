mod view;

use std::collections::VecDeque;
use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use cannonbattle::{DrawList, GameEvent, SimulationLoop};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::assets::SpriteAtlas;
use crate::input::Keyboard;

const MAX_LOG_LINES: usize = 64;

pub struct TuiState {
    log: VecDeque<String>,
    frames: u64,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            log: VecDeque::with_capacity(MAX_LOG_LINES),
            frames: 0,
        }
    }

    pub fn record(&mut self, event: &GameEvent) {
        if self.log.len() >= MAX_LOG_LINES {
            self.log.pop_front();
        }
        self.log.push_back(event.describe());
    }

    pub fn log_lines(&self) -> impl DoubleEndedIterator<Item = &String> {
        self.log.iter()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

pub fn run(sim: &mut SimulationLoop, atlas: &SpriteAtlas) -> Result<()> {
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, cursor::Hide)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, sim, atlas);

    terminal::disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, cursor::Show)?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    sim: &mut SimulationLoop,
    atlas: &SpriteAtlas,
) -> Result<()> {
    let mut state = TuiState::new();
    let mut keyboard = Keyboard::default();
    let mut draw_list = DrawList::new();
    let frame_budget = Duration::from_secs_f64(sim.timestep().dt());
    let mut last_frame = Instant::now();

    loop {
        if event::poll(frame_budget)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => break,
                        code => keyboard.press(code),
                    }
                }
            }
        }

        let now = Instant::now();
        let delta = now.duration_since(last_frame).as_secs_f64();
        last_frame = now;

        let report = sim.update(delta, now, keyboard.take())?;
        for event in &report.events {
            state.record(event);
        }

        draw_list.clear();
        sim.draw(&mut draw_list);
        state.frames += 1;

        terminal.draw(|frame| {
            view::render(frame, &state, sim, &draw_list, atlas);
        })?;
    }

    log::info!("Exiting after {} frames", state.frames());
    Ok(())
}
