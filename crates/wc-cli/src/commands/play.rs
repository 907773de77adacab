//! The interactive game loop.

use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use colored::{ColoredString, Colorize};
use parking_lot::Mutex;
use tracing::debug;

use wc_engine::{GameSession, Narration, Outcome, SessionState, Severity, UiRefresh};

use crate::PlayArgs;
use crate::settings::Settings;
use crate::store::FileStore;

const TICK: Duration = Duration::from_secs(1);

pub fn run(args: &PlayArgs) -> Result<(), String> {
    if args.no_color {
        colored::control::set_override(false);
    }
    let settings = Settings::resolve(args)?;
    let world = super::load_world(settings.world.as_deref())?;
    if settings.world.is_some() {
        for issue in world.validate() {
            eprintln!("{}: {issue}", "warning".yellow());
        }
    }

    let store = FileStore::new(settings.save_dir());
    let session = Arc::new(Mutex::new(GameSession::new(world, settings.engine, store)));
    let (stop, clock) = spawn_clock(Arc::clone(&session));

    let intro = session.lock().start();
    render(&intro, None);

    let result = repl(&session);

    // Dropping the sender wakes the clock thread and ends it
    drop(stop);
    clock
        .join()
        .map_err(|_| "clock thread panicked".to_string())?;
    result
}

fn repl(session: &Mutex<GameSession>) -> Result<(), String> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => {
                debug!("end of input");
                break;
            }
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let (outcome, status) = {
            let mut session = session.lock();
            let outcome = session.process(&line);
            let status = needs_status(&outcome).then(|| status_line(&session));
            (outcome, status)
        };
        render(&outcome, status.as_deref());
        if outcome.state == SessionState::Ended {
            break;
        }
    }
    Ok(())
}

/// Advance the play clock once a second until `stop` is dropped.
fn spawn_clock(session: Arc<Mutex<GameSession>>) -> (mpsc::Sender<()>, JoinHandle<()>) {
    let (stop, stopped) = mpsc::channel::<()>();
    let handle = thread::spawn(move || {
        while let Err(RecvTimeoutError::Timeout) = stopped.recv_timeout(TICK) {
            session.lock().tick();
        }
    });
    (stop, handle)
}

fn render(outcome: &Outcome, status: Option<&str>) {
    if outcome.is_silent() {
        return;
    }
    for line in &outcome.narration {
        println!("{}", paint(line));
    }
    if let Some(status) = status {
        println!("{}", status.dimmed());
    }
    println!();
}

fn paint(line: &Narration) -> ColoredString {
    let text = line.text.as_str();
    match line.severity {
        Severity::Normal => text.normal(),
        Severity::Info => text.cyan(),
        Severity::Success => text.green(),
        Severity::Error => text.red(),
        Severity::Highlight => text.yellow().bold(),
    }
}

fn needs_status(outcome: &Outcome) -> bool {
    outcome.state == SessionState::Playing
        && outcome
            .refresh
            .iter()
            .any(|r| matches!(r, UiRefresh::Vitals | UiRefresh::Inventory))
}

/// One-line summary of the player's vitals.
fn status_line(session: &GameSession) -> String {
    let p = session.player();
    format!(
        "[HP {}/{} | AP {}/{} | Rads {} | Caps {} | Lvl {} | {}]",
        p.hp,
        p.max_hp,
        p.ap,
        p.max_ap,
        p.rads,
        p.caps,
        p.level,
        session.clock()
    )
}
