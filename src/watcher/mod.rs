//! Change notifications for the document being previewed.
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};

use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};

/// Quiet period before a burst of writes counts as one change.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(200);

/// Watches one markdown file and reports debounced changes.
pub struct DocumentWatcher {
    _watcher: RecommendedWatcher,
    rx: Receiver<notify::Result<Event>>,
    dir: PathBuf,
    path: PathBuf,
    name: Option<OsString>,
    debounce: Duration,
    dirty_since: Option<Instant>,
}

impl DocumentWatcher {
    /// Start watching `path`.
    ///
    /// The parent directory is watched so editors that save by rename are seen.
    ///
    /// # Errors
    /// Returns an error if the watcher cannot be created or the directory cannot be watched.
    pub fn new(path: impl AsRef<Path>, debounce: Duration) -> notify::Result<Self> {
        // Backends report canonical paths.
        let path = path
            .as_ref()
            .canonicalize()
            .unwrap_or_else(|_| path.as_ref().to_path_buf());
        let name = path.file_name().map(std::ffi::OsStr::to_os_string);
        let dir = parent_dir(&path);

        let (tx, rx) = mpsc::channel();
        let mut watcher = notify::recommended_watcher(move |res| {
            let _ = tx.send(res);
        })?;
        watcher.watch(&dir, RecursiveMode::NonRecursive)?;
        tracing::debug!(path = %path.display(), "watching document");

        Ok(Self {
            _watcher: watcher,
            rx,
            dir,
            path,
            name,
            debounce,
            dirty_since: None,
        })
    }

    /// Canonical path of the watched file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Drain pending events without blocking.
    ///
    /// Returns true once a change has settled for the debounce period.
    pub fn poll(&mut self) -> bool {
        while let Ok(event) = self.rx.try_recv() {
            self.record(event);
        }
        self.settled()
    }

    /// Block until a settled change arrives or `timeout` passes.
    pub fn wait(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        loop {
            if self.poll() {
                return true;
            }
            let now = Instant::now();
            if now >= deadline {
                return false;
            }
            let step = self
                .dirty_since
                .map_or(deadline - now, |since| {
                    (since + self.debounce).saturating_duration_since(now)
                })
                .min(deadline - now);
            match self.rx.recv_timeout(step) {
                Ok(event) => self.record(event),
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => return self.settled(),
            }
        }
    }

    fn record(&mut self, event: notify::Result<Event>) {
        match event {
            Ok(event) if self.concerns(&event) => {
                tracing::debug!(kind = ?event.kind, "document changed");
                self.dirty_since = Some(Instant::now());
            }
            Ok(event) => {
                tracing::trace!(kind = ?event.kind, paths = ?event.paths, "ignored event");
            }
            Err(err) => tracing::warn!(%err, "watch error"),
        }
    }

    fn settled(&mut self) -> bool {
        match self.dirty_since {
            Some(since) if since.elapsed() >= self.debounce => {
                self.dirty_since = None;
                true
            }
            _ => false,
        }
    }

    fn concerns(&self, event: &Event) -> bool {
        event.paths.iter().any(|p| {
            p == &self.dir
                || p == &self.path
                || self
                    .name
                    .as_ref()
                    .is_some_and(|name| p.file_name().is_some_and(|f| f == name))
        })
    }
}

fn parent_dir(path: &Path) -> PathBuf {
    path.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
}
