use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::time::Instant;

use crate::app_core::PageCore;
use crate::config::Settings;
use crate::input::{KeyEvent, MouseInput};
use crate::listing::Listing;
use crate::logging::init_logging;
use crate::notify::NotificationCenter;

pub struct App {
    listing: Listing,
    settings: Settings,
}

impl App {
    pub fn new(listing: Listing, settings: Settings) -> Self {
        Self { listing, settings }
    }

    pub async fn run(self) -> Result<()> {
        let log_path = init_logging()?;
        tracing::info!("evlist starting, logging to {}", log_path.display());

        let mut terminal = Self::init()?;
        let mut event_stream = EventStream::new();

        let notifications = NotificationCenter::new(self.settings.notification_ttl());
        let mut interval = tokio::time::interval(self.settings.tick_rate());
        let mut core = PageCore::new(self.listing, self.settings, notifications, Instant::now());

        tracing::info!("Entering main event loop");

        loop {
            let now = Instant::now();
            core.tick(now);
            core.notifier_mut().prune(now);

            let area = terminal.get_frame().area();
            core.layout(area);
            terminal.draw(|f| {
                crate::ui::render_page(f, core.state(), core.notifier());
            })?;

            tokio::select! {
                _ = interval.tick() => {}
                Some(Ok(event)) = event_stream.next() => {
                    match event {
                        Event::Key(key) if matches!(key.kind, KeyEventKind::Press) => {
                            tracing::debug!("Key press: {:?}", key);
                            core.handle_key(KeyEvent::from(key));
                        }
                        Event::Mouse(mouse) => {
                            if let Ok(input) = MouseInput::try_from(mouse) {
                                core.handle_mouse(input);
                            }
                        }
                        _ => {
                            // Resizes are picked up by the next layout pass
                        }
                    }
                }
            }

            if core.should_quit() {
                tracing::info!("Quit requested, exiting event loop");
                break;
            }
        }

        tracing::info!("Cleaning up application");
        Self::exit(terminal)?;

        Ok(())
    }

    fn init() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>, std::io::Error> {
        enable_raw_mode()?;
        let mut stdout = std::io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    fn exit(mut terminal: Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<(), std::io::Error> {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }
}
