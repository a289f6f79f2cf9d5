use std::io;

use ankied_config::Config;
use ankied_core::PreviewTab;
use ankied_rain::{Animator, CursorGlow, FONT_SIZE, ThreadEntropy};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use ratatui::DefaultTerminal;

mod content;
mod ui;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = ankied_config::load();
    let mouse_glow = config.mouse_glow;

    let terminal = ratatui::init();
    if mouse_glow {
        // Decorative only: a terminal without mouse support still gets
        // the rest of the page.
        let _ = execute!(io::stdout(), EnableMouseCapture);
    }
    let result = App::new(config).run(terminal);
    if mouse_glow {
        let _ = execute!(io::stdout(), DisableMouseCapture);
    }
    ratatui::restore();
    result
}

/// The main application which holds the state and logic of the application.
pub struct App {
    /// Is the application running?
    running: bool,
    /// Currently selected preview tab.
    active_tab: PreviewTab,
    /// Is the flyout menu open?
    show_menu: bool,
    /// Loaded user configuration.
    config: Config,
    /// The rain animation, mounted on a surface sized to the terminal.
    animator: Animator,
    /// Random source feeding the animation.
    entropy: ThreadEntropy,
    /// Pointer-following background glow.
    glow: CursorGlow,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config) -> Self {
        // The surface is sized on the first pass through the run loop;
        // until then it is a zero-size no-op mount.
        let mut animator = Animator::new(0, 0);
        animator.set_fade_alpha(config.fade_alpha);
        Self {
            running: false,
            active_tab: PreviewTab::default(),
            show_menu: false,
            config,
            animator,
            entropy: ThreadEntropy::thread(),
            glow: CursorGlow::new(),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            let size = terminal.size()?;
            self.animator.resize(
                u32::from(size.width) * FONT_SIZE,
                u32::from(size.height) * FONT_SIZE,
            );
            if self.config.background {
                self.animator.on_tick(&mut self.entropy);
            }
            terminal.draw(|frame| ui::render(frame, &self))?;
            self.handle_crossterm_events()?;
        }
        // Teardown: no frame runs past this point.
        self.animator.stop();
        Ok(())
    }

    pub fn active_tab(&self) -> PreviewTab {
        self.active_tab
    }

    pub fn show_menu(&self) -> bool {
        self.show_menu
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    pub fn glow(&self) -> &CursorGlow {
        &self.glow
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Polls with the animation tick as timeout so frames keep flowing.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(self.config.speed.tick())? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(mouse) => self.on_mouse_event(mouse),
                // Surface dimensions are reconciled at the top of the
                // run loop.
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc) => {
                if self.show_menu {
                    self.show_menu = false;
                } else {
                    self.quit();
                }
            }
            (_, KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('m')) => self.show_menu = !self.show_menu,
            (_, KeyCode::Tab) => self.active_tab = self.active_tab.next(),
            (_, KeyCode::Char('1')) => self.active_tab = PreviewTab::Html,
            (_, KeyCode::Char('2')) => self.active_tab = PreviewTab::Css,
            (_, KeyCode::Char('3')) => self.active_tab = PreviewTab::Js,
            _ => {}
        }
    }

    /// Tracks pointer movement for the background glow.
    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        if !self.config.mouse_glow {
            return;
        }
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.glow.observe(mouse.column, mouse.row);
            }
            _ => {}
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        App::new(Config::default())
    }

    #[test]
    fn test_tab_keys_select_preview() {
        let mut app = app();
        app.on_key_event(key(KeyCode::Char('2')));
        assert_eq!(app.active_tab(), PreviewTab::Css);
        app.on_key_event(key(KeyCode::Char('3')));
        assert_eq!(app.active_tab(), PreviewTab::Js);
        app.on_key_event(key(KeyCode::Char('1')));
        assert_eq!(app.active_tab(), PreviewTab::Html);
    }

    #[test]
    fn test_tab_key_cycles() {
        let mut app = app();
        app.on_key_event(key(KeyCode::Tab));
        assert_eq!(app.active_tab(), PreviewTab::Css);
    }

    #[test]
    fn test_menu_toggle_and_esc() {
        let mut app = app();
        app.running = true;

        app.on_key_event(key(KeyCode::Char('m')));
        assert!(app.show_menu());

        // Esc closes the menu first, only then quits.
        app.on_key_event(key(KeyCode::Esc));
        assert!(!app.show_menu());
        assert!(app.running);

        app.on_key_event(key(KeyCode::Esc));
        assert!(!app.running);
    }

    #[test]
    fn test_q_quits() {
        let mut app = app();
        app.running = true;
        app.on_key_event(key(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[test]
    fn test_mouse_moves_drive_glow() {
        let mut app = app();
        let mouse = MouseEvent {
            kind: MouseEventKind::Moved,
            column: 12,
            row: 4,
            modifiers: KeyModifiers::NONE,
        };
        app.on_mouse_event(mouse);
        assert!(app.glow().color_at(12, 4).is_some());
    }

    #[test]
    fn test_glow_disabled_by_config() {
        let mut app = App::new(Config {
            mouse_glow: false,
            ..Config::default()
        });
        let mouse = MouseEvent {
            kind: MouseEventKind::Moved,
            column: 12,
            row: 4,
            modifiers: KeyModifiers::NONE,
        };
        app.on_mouse_event(mouse);
        assert!(app.glow().color_at(12, 4).is_none());
    }
}
