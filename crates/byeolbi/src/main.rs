use std::time::{Duration, Instant};

use byeolbi_config::Config;
use byeolbi_scene::SceneState;
use byeolbi_typist::Typist;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Alignment, Constraint, Layout},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::Paragraph,
};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::load()?;
    let terminal = ratatui::init();
    let result = App::new(config).run(terminal);
    ratatui::restore();
    result
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// The animated night-sky scene.
    scene: SceneState,
    /// The typewriter message rotation.
    typist: Typist,
    /// Wall clock for both the frame loop and the typist deadlines.
    started: Instant,
    /// Frame interval.
    tick: Duration,
}

impl App {
    /// Construct a new instance of [`App`] from the loaded config.
    pub fn new(config: Config) -> Self {
        Self {
            running: false,
            scene: SceneState::new(),
            typist: Typist::with_delays(&config.messages, config.reveal_ms, config.pause_ms),
            started: Instant::now(),
            tick: Duration::from_millis(config.tick_ms.max(1)),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        self.started = Instant::now();
        while self.running {
            let elapsed_ms = self.started.elapsed().as_millis() as u64;
            // The typist runs on its own deadline chain; missed steps
            // are replayed, so its cadence is frame-rate independent.
            self.typist.tick(elapsed_ms);
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// Renders one frame: the scene canvas, then the message overlay.
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.scene.render(frame, area);

        let message_lines = self.typist.lines();

        // Overlay layout: message in the lower third, help at the bottom.
        let chunks = Layout::vertical([
            Constraint::Fill(3),
            Constraint::Length(message_lines.len() as u16),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .split(area);

        let message_text: Vec<Line> = message_lines
            .into_iter()
            .map(|s| Line::from(s).style(Style::new().fg(Color::Rgb(255, 220, 180))))
            .collect();
        let message = Paragraph::new(message_text).alignment(Alignment::Center);
        frame.render_widget(message, chunks[1]);

        let help = Line::from(vec!["q".bold().white(), " quit".dark_gray()]).centered();
        frame.render_widget(help, chunks[3]);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Uses polling with the frame interval as timeout so the scene
    /// keeps animating while idle.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(self.tick)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(_) => {}
                // The next frame re-fits the canvas to the new area.
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            _ => {}
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
