//! Live dashboard loop
//!
//! Redraws on file changes in `.planning/`, on keypresses, and on a timer
//! that runs faster while an iteration is in progress.

use chrono::Local;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use notify::{Event as FsEvent, RecommendedWatcher, RecursiveMode, Watcher};
use std::io::{self, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

use super::log::refresh_interval;
use super::render::{render, Palette};
use super::{ProgressFiles, Snapshot};
use crate::error::{Error, Result};

const KEY_POLL: Duration = Duration::from_millis(200);

/// What woke the loop up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wake {
    FilesChanged,
    Pause,
    Resume,
    Quit,
}

/// Map a keypress to its dashboard action
pub fn key_action(key: &KeyEvent) -> Option<Wake> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Wake::Quit),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Wake::Pause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Wake::Resume),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Wake::Quit),
        _ => None,
    }
}

/// Restores cooked mode when the loop ends, however it ends
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> Option<Self> {
        match enable_raw_mode() {
            Ok(()) => Some(Self),
            Err(e) => {
                warn!("Keyboard controls unavailable: {}", e);
                None
            }
        }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            error!("Failed to restore terminal mode: {}", e);
        }
    }
}

/// Run the dashboard for `root` until the user quits.
pub fn run(root: &Path) -> Result<()> {
    if !root.exists() {
        return Err(Error::ProjectRootNotFound {
            path: root.to_path_buf(),
        });
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(watch(ProgressFiles::new(root), Palette::from_env()))
}

async fn watch(files: ProgressFiles, palette: Palette) -> Result<()> {
    let (tx, mut rx) = unbounded_channel();

    // Kept alive for the duration of the loop
    let _fs_watcher = watch_planning_dir(&files, tx.clone())?;

    let raw_mode = RawModeGuard::enable();
    let stop = Arc::new(AtomicBool::new(false));
    let keys = raw_mode
        .as_ref()
        .map(|_| spawn_key_reader(tx.clone(), Arc::clone(&stop)));

    info!("Watching {}", files.planning.display());
    let raw = raw_mode.is_some();
    draw(&files, &palette, raw)?;

    let result = event_loop(&files, &palette, raw, &mut rx).await;

    stop.store(true, Ordering::Relaxed);
    if let Some(handle) = keys {
        let _ = handle.join();
    }
    drop(raw_mode);

    println!(
        "\n\n{}Stopping progress watcher...{}",
        palette.yellow, palette.reset
    );
    result
}

async fn event_loop(
    files: &ProgressFiles,
    palette: &Palette,
    raw: bool,
    rx: &mut UnboundedReceiver<Wake>,
) -> Result<()> {
    loop {
        let interval = refresh_interval(files.read_log().as_deref());

        tokio::select! {
            wake = rx.recv() => match wake {
                Some(Wake::Quit) | None => return Ok(()),
                Some(Wake::Pause) => {
                    if let Err(e) = files.pause() {
                        warn!("{}", e);
                    }
                }
                Some(Wake::Resume) => {
                    if let Err(e) = files.resume() {
                        warn!("{}", e);
                    }
                }
                Some(Wake::FilesChanged) => {}
            },
            _ = tokio::time::sleep(interval) => {}
            _ = tokio::signal::ctrl_c() => return Ok(()),
        }

        draw(files, palette, raw)?;
    }
}

fn draw(files: &ProgressFiles, palette: &Palette, raw: bool) -> Result<()> {
    let frame = render(&Snapshot::read(files), palette, Local::now());
    // raw mode turns off output newline translation
    let frame = if raw {
        frame.replace('\n', "\r\n")
    } else {
        frame
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(frame.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Watch `.planning/` for the tracked files. `None` when the directory does
/// not exist yet; the timer still picks up changes then.
fn watch_planning_dir(
    files: &ProgressFiles,
    tx: UnboundedSender<Wake>,
) -> Result<Option<RecommendedWatcher>> {
    if !files.planning.is_dir() {
        debug!("{} does not exist, relying on timer", files.planning.display());
        return Ok(None);
    }

    let mut watcher = notify::recommended_watcher(move |res: notify::Result<FsEvent>| match res {
        Ok(event) => {
            let tracked = event.paths.iter().any(|p| {
                p.file_name()
                    .and_then(|n| n.to_str())
                    .map(ProgressFiles::is_tracked)
                    .unwrap_or(false)
            });
            if tracked {
                let _ = tx.send(Wake::FilesChanged);
            }
        }
        Err(e) => error!("File watch error: {}", e),
    })
    .map_err(|e| Error::WatchFailed {
        reason: format!("Failed to create watcher: {}", e),
    })?;

    watcher
        .watch(&files.planning, RecursiveMode::NonRecursive)
        .map_err(|e| Error::WatchFailed {
            reason: format!("Failed to watch directory: {}", e),
        })?;

    Ok(Some(watcher))
}

/// Blocking key reader on its own thread; polls so it can notice `stop`
fn spawn_key_reader(tx: UnboundedSender<Wake>, stop: Arc<AtomicBool>) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        while !stop.load(Ordering::Relaxed) {
            match event::poll(KEY_POLL) {
                Ok(true) => {}
                Ok(false) => continue,
                Err(e) => {
                    debug!("Key polling stopped: {}", e);
                    return;
                }
            }

            let key = match event::read() {
                Ok(Event::Key(key)) => key,
                Ok(_) => continue,
                Err(e) => {
                    debug!("Key read failed: {}", e);
                    return;
                }
            };

            if let Some(wake) = key_action(&key) {
                if tx.send(wake).is_err() || wake == Wake::Quit {
                    return;
                }
            }
        }
    })
}
