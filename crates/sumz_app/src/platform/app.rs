use std::io::{self, BufRead, Write};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use sumz_core::AppState;
use sumz_engine::{
    ensure_data_dir, ArticleStore, EngineHandle, FileStorage, ReqwestSummaryClient,
    SessionController,
};
use sumz_logging::{sumz_info, sumz_warn};

use super::clipboard::SystemClipboard;
use super::input::{parse_command, Command, HELP};
use super::{config, render};

/// Interval at which engine completions and timers are picked up.
const TICK: Duration = Duration::from_millis(75);

pub fn run_app() -> Result<()> {
    let config = config::load()?;
    sumz_logging::initialize(&config.log);

    ensure_data_dir(&config.data_dir)
        .with_context(|| format!("preparing data dir {}", config.data_dir.display()))?;
    if config.summarize.api_key.is_none() {
        sumz_warn!("No API key configured; the summarization service may reject requests");
    }

    let client = ReqwestSummaryClient::new(config.summarize.clone())?;
    let engine = EngineHandle::new(Arc::new(client)).context("starting engine")?;
    let store = ArticleStore::new(FileStorage::new(&config.data_dir));
    let mut session = SessionController::new(
        AppState::with_copy_timeout(config.copy_feedback),
        store,
        Box::new(SystemClipboard::default()),
        engine,
    );
    sumz_info!(
        "Started with {} stored articles in {}",
        session.state().articles().len(),
        config.data_dir.display()
    );

    let (cmd_tx, cmd_rx) = mpsc::channel::<Command>();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if let Some(command) = parse_command(&line) {
                if cmd_tx.send(command).is_err() {
                    return;
                }
            }
        }
        let _ = cmd_tx.send(Command::Quit);
    });

    println!("{HELP}");
    print_view(&mut session);

    loop {
        match cmd_rx.recv_timeout(TICK) {
            Ok(Command::Quit) | Err(mpsc::RecvTimeoutError::Disconnected) => break,
            Ok(command) => apply(&mut session, command),
            Err(mpsc::RecvTimeoutError::Timeout) => {}
        }
        session.pump();
        if session.consume_dirty() {
            print_view(&mut session);
        }
    }

    sumz_info!("Shutting down");
    Ok(())
}

fn apply(session: &mut SessionController, command: Command) {
    match command {
        Command::Submit(url) => {
            let before = session.state().latest_request_id();
            session.submit(url);
            if session.state().latest_request_id() == before {
                println!("Please enter a valid URL, e.g. https://example.com/article");
            }
        }
        Command::Select(index) => select_or_warn(session, index, SessionController::select),
        Command::Copy(index) => select_or_warn(session, index, SessionController::copy),
        Command::Show => print_view(session),
        Command::Help => println!("{HELP}"),
        Command::Invalid(reason) => println!("{reason}"),
        Command::Quit => {}
    }
}

fn select_or_warn(
    session: &mut SessionController,
    index: usize,
    action: fn(&mut SessionController, usize),
) {
    let count = session.state().articles().len();
    if index >= count {
        println!("No article {} (history has {})", index + 1, count);
        return;
    }
    action(session, index);
}

fn print_view(session: &mut SessionController) {
    session.consume_dirty();
    let mut out = io::stdout().lock();
    for line in render::render(&session.view()) {
        let _ = writeln!(out, "{line}");
    }
    let _ = out.flush();
}
