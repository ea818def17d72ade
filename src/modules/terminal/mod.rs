pub mod render;

use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use log::info;

use crate::modules::display::{DisplaySurface, ElementId, MemorySurface};
use crate::modules::page::{Button, Host, Page, PageEvent, ReadyState};
use crate::modules::storage::JsonFileStore;
use crate::modules::timer::TimerQueue;
use crate::modules::utils::io::{prompt, read_line};

pub use render::{render_page, show_menu};

/// The page as the terminal host runs it
pub type TerminalPage = Page<MemorySurface, JsonFileStore, TimerQueue>;

/// A parsed menu choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Click(Button),
    Login,
    Reload,
    Exit,
}

/// Parse a menu choice by number or name
pub fn parse_command(input: &str) -> Option<Command> {
    let command = match input.trim().to_lowercase().as_str() {
        "1" | "inc" => Command::Click(Button::Increment),
        "2" | "dec" => Command::Click(Button::Decrement),
        "3" | "reset" => Command::Click(Button::Reset),
        "4" | "login" => Command::Login,
        "5" | "load" => Command::Click(Button::LoadSaved),
        "6" | "clear-form" => Command::Click(Button::ClearForm),
        "7" | "clear-storage" => Command::Click(Button::ClearStorage),
        "8" | "reload" => Command::Reload,
        "9" | "exit" | "quit" => Command::Exit,
        _ => return None,
    };
    Some(command)
}

/// Build a page over the store file and run it through start-up: parse,
/// structure-ready, resources-loaded
pub fn open_page(store_path: &Path) -> TerminalPage {
    let host = Host::new(
        MemorySurface::new(),
        JsonFileStore::open(store_path),
        TimerQueue::new(),
    );
    let mut page = Page::open(host, ReadyState::Loading);
    page.dispatch(PageEvent::StructureReady);
    page.dispatch(PageEvent::ResourcesLoaded);
    page
}

/// Interactive terminal session around one page
pub struct TerminalSession {
    page: TerminalPage,
    store_path: PathBuf,
    last_tick: Instant,
}

impl TerminalSession {
    pub fn open(store_path: impl Into<PathBuf>) -> Self {
        let store_path = store_path.into();
        info!("Opening page with store {}", store_path.display());
        Self {
            page: open_page(&store_path),
            store_path,
            last_tick: Instant::now(),
        }
    }

    pub fn page(&self) -> &TerminalPage {
        &self.page
    }

    /// Run commands until exit or end of input
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.tick();
            print!("{}", render_page(&self.page.host().surface));
            show_menu();

            let choice = match read_line() {
                Ok(input) => input,
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(()),
                Err(e) => return Err(e),
            };

            // Timers that expired while waiting for input run first
            self.tick();

            match parse_command(&choice) {
                Some(Command::Exit) => {
                    println!("Goodbye!");
                    return Ok(());
                }
                Some(command) => self.execute(command)?,
                None => println!(
                    "\nInvalid choice. Please enter a number (1-9) or a command name."
                ),
            }
        }
    }

    fn execute(&mut self, command: Command) -> io::Result<()> {
        match command {
            Command::Click(button) => self.page.dispatch(PageEvent::Click(button)),
            Command::Login => {
                let login = prompt("Login")?;
                print!("Password: ");
                io::Write::flush(&mut io::stdout())?;
                let password = rpassword::read_password()?;
                self.submit(&login, &password);
            }
            Command::Reload => self.reload(),
            Command::Exit => {}
        }
        Ok(())
    }

    /// Type both fields and submit the form
    pub fn submit(&mut self, login: &str, password: &str) {
        let surface = &mut self.page.host_mut().surface;
        surface.set_input_value(ElementId::LoginInput, login);
        surface.set_input_value(ElementId::PasswordInput, password);
        self.page.dispatch(PageEvent::Submit);
    }

    /// Drop the page and open a fresh one over the same store file
    pub fn reload(&mut self) {
        info!("Reloading page");
        self.page = open_page(&self.store_path);
        self.last_tick = Instant::now();
    }

    /// Feed elapsed wall-clock time to the page timers
    fn tick(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_tick);
        self.last_tick = now;
        let fired = self.page.advance_time(elapsed);
        if fired > 0 {
            info!("{} timer(s) fired", fired);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::storage::KeyValueStore;
    use crate::{LOGIN_KEY, PASSWORD_KEY};
    use tempfile::tempdir;

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("1"), Some(Command::Click(Button::Increment)));
        assert_eq!(parse_command(" DEC "), Some(Command::Click(Button::Decrement)));
        assert_eq!(parse_command("login"), Some(Command::Login));
        assert_eq!(
            parse_command("clear-storage"),
            Some(Command::Click(Button::ClearStorage))
        );
        assert_eq!(parse_command("8"), Some(Command::Reload));
        assert_eq!(parse_command("quit"), Some(Command::Exit));
        assert_eq!(parse_command("10"), None);
        assert_eq!(parse_command(""), None);
    }

    #[test]
    fn test_session_persists_across_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");

        let mut session = TerminalSession::open(&path);
        session.execute(Command::Click(Button::Increment)).unwrap();
        session.submit(" admin", "admin ");
        assert_eq!(session.page().host().store.get(LOGIN_KEY), Some("admin".to_string()));

        session.reload();
        let surface = &session.page().host().surface;
        assert_eq!(session.page().counter_value(), 0);
        assert_eq!(surface.input_value(ElementId::LoginInput), "admin");
        assert_eq!(surface.input_value(ElementId::PasswordInput), "admin");

        // A separate process opening the same file sees the record too
        let store = JsonFileStore::open(&path);
        assert_eq!(store.get(PASSWORD_KEY), Some("admin".to_string()));
    }

    #[test]
    fn test_clear_storage_reaches_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");

        let mut session = TerminalSession::open(&path);
        session.submit("admin", "admin");
        session.execute(Command::Click(Button::ClearStorage)).unwrap();
        drop(session);

        let page = open_page(&path);
        assert_eq!(page.host().surface.input_value(ElementId::LoginInput), "");
        assert_eq!(page.host().store.get(LOGIN_KEY), None);
    }
}
