//! Worker-thread word store with snapshot broadcasting.
//!
//! # Responsibility
//! - Own the SQLite connection on a single background thread.
//! - Apply `add`/`clear` commands in arrival order and rebroadcast the
//!   ordered word list after every successful mutation.
//! - Hand out `WordsFeed` subscriptions that start with the current snapshot.
//!
//! # Invariants
//! - Exactly one worker per store; commands are processed strictly in order.
//! - A duplicate `add` changes nothing and emits nothing, so the last
//!   emission stays valid unchanged.
//! - A storage fault fails only the command that hit it; the worker keeps
//!   serving later commands.

use crate::db::{open_db, open_db_in_memory};
use crate::model::word::Word;
use crate::repo::word_repo::{RepoResult, SqliteWordRepository, WordRepository};
use crossbeam_channel::{unbounded, Receiver, Sender};
use log::{error, info, warn};
use rusqlite::Connection;
use std::path::Path;
use std::thread::{self, JoinHandle};
use std::time::Duration;

enum Command {
    Add(Word),
    Clear,
    Subscribe(Sender<Vec<Word>>),
    Shutdown,
}

/// Handle to the background word store.
///
/// Construct one instance at startup and pass it down; there is no hidden
/// global. Dropping (or calling [`WordStore::close`]) stops the worker and
/// ends all feeds.
pub struct WordStore {
    tx: Sender<Command>,
    worker: Option<JoinHandle<()>>,
}

/// Receiving end of one subscription to the word list.
///
/// The first value is the snapshot at subscription time; every later value is
/// the full ordered list after some mutation. Values may be coalesced under
/// load, but the last one received always reflects the true current set.
pub struct WordsFeed {
    rx: Receiver<Vec<Word>>,
}

impl WordsFeed {
    /// Blocks until the next emission. Returns `None` once the store closed.
    pub fn recv(&self) -> Option<Vec<Word>> {
        self.rx.recv().ok()
    }

    /// Blocks up to `timeout` for the next emission.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<Vec<Word>> {
        self.rx.recv_timeout(timeout).ok()
    }

    /// Returns the next emission if one is already queued.
    pub fn try_recv(&self) -> Option<Vec<Word>> {
        self.rx.try_recv().ok()
    }

    /// Drains queued emissions and returns the most recent one, if any.
    ///
    /// Full-redraw consumers only care about the latest snapshot, so backlog
    /// in between carries no extra information.
    pub fn latest(&self) -> Option<Vec<Word>> {
        let mut last = None;
        while let Ok(words) = self.rx.try_recv() {
            last = Some(words);
        }
        last
    }
}

impl WordStore {
    /// Opens (or creates) the database file and starts the worker.
    pub fn open(path: impl AsRef<Path>) -> RepoResult<Self> {
        let conn = open_db(path)?;
        Ok(Self::start(conn))
    }

    /// Starts a store over an in-memory database. Used by tests and the CLI
    /// smoke probe.
    pub fn open_in_memory() -> RepoResult<Self> {
        let conn = open_db_in_memory()?;
        Ok(Self::start(conn))
    }

    fn start(conn: Connection) -> Self {
        let (tx, rx) = unbounded();
        let worker = thread::spawn(move || run_worker(conn, rx));
        info!("event=store_start module=store status=ok");
        Self {
            tx,
            worker: Some(worker),
        }
    }

    /// Enqueues an insert and returns immediately.
    ///
    /// Completion is only observable through the next feed emission: a new
    /// word shows up there, a duplicate changes nothing. A storage fault is
    /// logged by the worker and abandons only this insert.
    pub fn add(&self, word: Word) {
        if self.tx.send(Command::Add(word)).is_err() {
            warn!("event=store_add module=store status=dropped reason=store_closed");
        }
    }

    /// Enqueues removal of every word. The next emission is the empty list.
    pub fn clear(&self) {
        if self.tx.send(Command::Clear).is_err() {
            warn!("event=store_clear module=store status=dropped reason=store_closed");
        }
    }

    /// Registers a subscriber. The feed's first value is the current snapshot.
    ///
    /// If the store already closed, the feed ends immediately (`recv` returns
    /// `None` without ever emitting).
    pub fn subscribe(&self) -> WordsFeed {
        let (sub_tx, sub_rx) = unbounded();
        if self.tx.send(Command::Subscribe(sub_tx)).is_err() {
            warn!("event=store_subscribe module=store status=dropped reason=store_closed");
        }
        WordsFeed { rx: sub_rx }
    }

    /// Stops accepting new work, drains queued commands and joins the worker.
    ///
    /// Commands enqueued before the close are still applied; feeds end after
    /// their final emission.
    pub fn close(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        if self.tx.send(Command::Shutdown).is_ok() {
            info!("event=store_close module=store status=start");
        }
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
            info!("event=store_close module=store status=ok");
        }
    }
}

impl Drop for WordStore {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn run_worker(conn: Connection, rx: Receiver<Command>) {
    let repo = match SqliteWordRepository::try_new(&conn) {
        Ok(repo) => repo,
        Err(err) => {
            // Unreachable through open()/open_in_memory(), which prepare the
            // schema first; bail out rather than serve a broken connection.
            error!("event=store_worker module=store status=error error_code=bad_connection error={err}");
            return;
        }
    };

    let mut subscribers: Vec<Sender<Vec<Word>>> = Vec::new();

    for command in rx.iter() {
        match command {
            Command::Add(word) => match repo.insert_word(&word) {
                Ok(true) => {
                    info!(
                        "event=store_add module=store status=ok word_len={}",
                        word.text.len()
                    );
                    publish(&repo, &mut subscribers);
                }
                Ok(false) => {
                    // Duplicate: silent no-op by contract, no emission.
                    info!("event=store_add module=store status=ignored reason=duplicate");
                }
                Err(err) => {
                    error!(
                        "event=store_add module=store status=error error_code=insert_failed error={err}"
                    );
                }
            },
            Command::Clear => match repo.clear_words() {
                Ok(()) => {
                    info!("event=store_clear module=store status=ok");
                    publish(&repo, &mut subscribers);
                }
                Err(err) => {
                    error!(
                        "event=store_clear module=store status=error error_code=clear_failed error={err}"
                    );
                }
            },
            Command::Subscribe(sub_tx) => match repo.list_words_ordered() {
                Ok(words) => {
                    if sub_tx.send(words).is_ok() {
                        subscribers.push(sub_tx);
                    }
                }
                Err(err) => {
                    // Dropping the sender ends the feed; the failed
                    // subscription surfaces as an immediately-closed stream.
                    error!(
                        "event=store_subscribe module=store status=error error_code=snapshot_failed error={err}"
                    );
                }
            },
            Command::Shutdown => break,
        }
    }
}

fn publish(repo: &SqliteWordRepository<'_>, subscribers: &mut Vec<Sender<Vec<Word>>>) {
    let words = match repo.list_words_ordered() {
        Ok(words) => words,
        Err(err) => {
            error!(
                "event=store_publish module=store status=error error_code=snapshot_failed error={err}"
            );
            return;
        }
    };

    subscribers.retain(|sub_tx| sub_tx.send(words.clone()).is_ok());
}
