use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::rngs::SmallRng;
use ratatui::Frame;
use rand::{Rng, SeedableRng};
use tracing::{info, trace};

use crate::config::Config;
use crate::error::CorpusError;
use crate::generator::TextGenerator;
use crate::generator::corpus::CorpusLibrary;
use crate::generator::word_pool::WordPoolGenerator;
use crate::session::clock::RunClock;
use crate::session::input;
use crate::session::result::TestResult;
use crate::session::settings::RunSettings;
use crate::session::typing_test::TypingTest;
use crate::ui::components::menu::Menu;
use crate::ui::components::results::ResultsView;
use crate::ui::components::test_screen::TestScreen;
use crate::ui::terminal::TermSize;
use crate::ui::theme::Palette;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppScreen {
    Menu,
    Test,
    Results,
}

/// The run on screen, kept after it finishes so the results screen can
/// start another with the same settings.
pub struct ActiveRun {
    pub settings: RunSettings,
    pub test: TypingTest,
    pub clock: RunClock,
}

pub struct App {
    pub screen: AppScreen,
    pub menu: Menu,
    pub run: Option<ActiveRun>,
    pub last_result: Option<TestResult>,
    pub config: Config,
    pub palette: Palette,
    pub should_quit: bool,
    corpora: CorpusLibrary,
    rng: SmallRng,
}

impl App {
    /// `seed` makes every generated text reproducible.
    pub fn new(config: Config, palette: Palette, seed: Option<u64>) -> anyhow::Result<Self> {
        let corpora = CorpusLibrary::load()?;
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        Ok(Self {
            screen: AppScreen::Menu,
            menu: Menu::new(&config),
            run: None,
            last_result: None,
            config,
            palette,
            should_quit: false,
            corpora,
            rng,
        })
    }

    pub fn start_run(&mut self, settings: RunSettings) -> Result<(), CorpusError> {
        let list = self.corpora.get(settings.corpus);
        let rng = SmallRng::seed_from_u64(self.rng.r#gen());
        let mut generator = WordPoolGenerator::new(list, rng);
        let text = generator.generate(settings.words_to_generate(self.config.timer_word_pool))?;

        info!(
            corpus = settings.corpus.as_str(),
            mode = %settings.mode_label(),
            chars = text.chars().count(),
            "run started"
        );

        self.run = Some(ActiveRun {
            settings,
            test: TypingTest::new(&text),
            clock: settings.clock(),
        });
        self.screen = AppScreen::Test;
        Ok(())
    }

    /// Fresh words with the current run's settings, or the menu selection
    /// when nothing has run yet.
    pub fn restart(&mut self) -> Result<(), CorpusError> {
        let settings = self
            .run
            .as_ref()
            .map(|run| run.settings)
            .unwrap_or_else(|| self.menu.selection());
        info!("run restarted");
        self.start_run(settings)
    }

    pub fn type_char(&mut self, ch: char, now: Instant) {
        let Some(run) = self.run.as_mut() else {
            return;
        };
        if run.test.finished_at.is_some() {
            return;
        }
        // Keys can arrive faster than ticks; a late one ends the run unread.
        if run.clock.is_expired(now) {
            self.finish_run(now);
            return;
        }
        run.clock.start(now);
        if let Some(event) = input::process_char(&mut run.test, ch) {
            trace!(
                position = event.position,
                expected = %event.expected,
                actual = %event.actual,
                correct = event.correct,
                "keystroke"
            );
        }

        if run.test.is_complete() {
            self.finish_run(now);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(run) = self.run.as_mut() {
            input::process_backspace(&mut run.test);
        }
    }

    /// Ends a timer run once its countdown runs out.
    pub fn on_tick(&mut self, now: Instant) {
        if self.screen != AppScreen::Test {
            return;
        }
        if self.run.as_ref().is_some_and(|run| run.clock.is_expired(now)) {
            self.finish_run(now);
        }
    }

    fn finish_run(&mut self, now: Instant) {
        let Some(run) = self.run.as_mut() else {
            return;
        };
        run.clock.stop(now);
        run.test.finish();

        let result = TestResult::from_test(
            &run.test,
            run.clock.elapsed(now),
            run.settings.corpus,
            run.settings.word_count(),
        );
        info!(
            wpm = result.wpm,
            raw_wpm = result.raw_wpm,
            accuracy = result.accuracy,
            "run finished"
        );

        self.last_result = Some(result);
        self.screen = AppScreen::Results;
    }

    fn go_to_menu(&mut self) {
        self.run = None;
        self.screen = AppScreen::Menu;
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Result<(), CorpusError> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return Ok(());
        }

        match self.screen {
            AppScreen::Menu => self.handle_menu_key(key),
            AppScreen::Test => self.handle_test_key(key, ctrl, now),
            AppScreen::Results => self.handle_results_key(key, ctrl),
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) -> Result<(), CorpusError> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.menu.up(),
            KeyCode::Down | KeyCode::Char('j') => self.menu.down(),
            KeyCode::Left | KeyCode::Char('h') => self.menu.left(),
            KeyCode::Right | KeyCode::Char('l') => self.menu.right(),
            KeyCode::Tab => self.menu.tab(),
            KeyCode::Enter => return self.start_run(self.menu.selection()),
            _ => {}
        }
        Ok(())
    }

    fn handle_test_key(
        &mut self,
        key: KeyEvent,
        ctrl: bool,
        now: Instant,
    ) -> Result<(), CorpusError> {
        match key.code {
            KeyCode::Char('r') if ctrl => return self.restart(),
            KeyCode::Esc => self.go_to_menu(),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Char(ch) if !ctrl => self.type_char(ch, now),
            _ => {}
        }
        Ok(())
    }

    fn handle_results_key(&mut self, key: KeyEvent, ctrl: bool) -> Result<(), CorpusError> {
        match key.code {
            KeyCode::Enter => return self.restart(),
            KeyCode::Char('r') if ctrl => return self.restart(),
            KeyCode::Esc => self.go_to_menu(),
            _ => {}
        }
        Ok(())
    }

    /// Draws the current screen. `size` sizes the word pipeline; widgets
    /// fill the frame's area.
    pub fn draw(&self, frame: &mut Frame, size: TermSize, now: Instant) {
        let area = frame.area();
        match (self.screen, &self.run, &self.last_result) {
            (AppScreen::Test, Some(run), _) => {
                let screen = TestScreen::new(
                    &run.test,
                    &run.clock,
                    &self.palette,
                    self.config.line_width_cap,
                    size,
                    now,
                );
                frame.render_widget(screen, area);
            }
            (AppScreen::Results, _, Some(result)) => {
                frame.render_widget(ResultsView::new(result, &self.palette), area);
            }
            _ => frame.render_widget(self.menu.view(&self.palette), area),
        }
    }
}
