//! Configuration file watcher for hot reload.
//!
//! The parent directory is watched rather than the file itself: editors often
//! save by writing a temp file and renaming it over the original, which would
//! silently end a watch on the file's inode.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::config::loader::load_config;
use crate::config::schema::I18nConfig;

/// Watches an i18n configuration file and publishes validated reloads.
pub struct ConfigWatcher {
    path: PathBuf,
    update_tx: mpsc::UnboundedSender<I18nConfig>,
}

impl ConfigWatcher {
    /// Create a watcher for `path`.
    ///
    /// Returns the watcher and a receiver for configuration updates.
    pub fn new(path: &Path) -> (Self, mpsc::UnboundedReceiver<I18nConfig>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();
        let watcher = Self {
            path: path.to_path_buf(),
            update_tx,
        };
        (watcher, update_rx)
    }

    /// Start watching. The returned handle must stay alive for updates to flow.
    ///
    /// Only configurations that load, validate and differ from the last
    /// published one are sent.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let file_name = self.path.file_name().map(ToOwned::to_owned);

        let path = self.path.clone();
        let tx = self.update_tx;
        let last_published: Arc<Mutex<Option<I18nConfig>>> = Arc::new(Mutex::new(load_config(&path).ok()));

        let handler = move |res: notify::Result<Event>| {
            let event = match res {
                Ok(event) => event,
                Err(e) => {
                    tracing::error!(error = %e, "Config watch error");
                    return;
                }
            };

            let touches_config = event
                .paths
                .iter()
                .any(|changed| changed.file_name().map(ToOwned::to_owned) == file_name);
            if !touches_config || !matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_)) {
                return;
            }

            let new_config = match load_config(&path) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!(path = ?path, error = %e, "Config reload rejected, keeping current configuration");
                    return;
                }
            };

            let Ok(mut last) = last_published.lock() else {
                tracing::error!("Config watcher state poisoned");
                return;
            };
            if last.as_ref() == Some(&new_config) {
                tracing::debug!(path = ?path, "Config unchanged, reload skipped");
                return;
            }

            tracing::info!(path = ?path, "Config changed, publishing reload");
            *last = Some(new_config.clone());
            if tx.send(new_config).is_err() {
                tracing::debug!("Config receiver dropped, update discarded");
            }
        };

        let mut watcher = RecommendedWatcher::new(
            handler,
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;
        watcher.watch(&dir, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?self.path, dir = ?dir, "Config watcher started");
        Ok(watcher)
    }
}
