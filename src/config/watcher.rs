use anyhow::Result;
use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::channel;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// A path whose changes trigger a reload
#[derive(Debug, Clone, PartialEq, Eq)]
enum WatchTarget {
    /// Single file, watched through its parent directory so that
    /// rename-over saves keep being seen
    File(PathBuf),
    /// Directory tree, any change below it counts
    Dir(PathBuf),
}

impl WatchTarget {
    fn matches(&self, path: &Path) -> bool {
        match self {
            WatchTarget::File(file) => path == file,
            WatchTarget::Dir(dir) => path.starts_with(dir),
        }
    }
}

/// Calls `on_change` whenever one of the watched paths changes.
///
/// Watching stops when the value is dropped.
pub struct ConfigWatcher {
    _watcher: RecommendedWatcher,
}

impl ConfigWatcher {
    pub fn new<F>(paths: Vec<PathBuf>, on_change: F) -> Result<Self>
    where
        F: Fn() + Send + Sync + 'static,
    {
        let (tx, rx) = channel();

        let mut watcher = RecommendedWatcher::new(tx, Config::default())?;
        let mut targets = Vec::new();

        for path in &paths {
            if path.is_dir() {
                let dir = absolute(path);
                watcher.watch(&dir, RecursiveMode::Recursive)?;
                info!("Watching configuration directory: {}", dir.display());
                targets.push(WatchTarget::Dir(dir));
            } else if path.exists() {
                let file = absolute(path);
                let parent = file
                    .parent()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| PathBuf::from("."));
                watcher.watch(&parent, RecursiveMode::NonRecursive)?;
                info!("Watching configuration file: {}", file.display());
                targets.push(WatchTarget::File(file));
            } else {
                warn!("Configuration path does not exist, skipping: {}", path.display());
            }
        }

        std::thread::spawn(move || loop {
            match rx.recv() {
                Ok(Ok(event)) => {
                    if !is_relevant(&event, &targets) {
                        continue;
                    }
                    // Editors emit bursts of events; settle before reloading
                    std::thread::sleep(Duration::from_millis(100));
                    while rx.try_recv().is_ok() {}
                    info!("Configuration change detected, reloading...");
                    on_change();
                }
                Ok(Err(e)) => error!("Watch error: {:?}", e),
                Err(_) => {
                    // Sender dropped together with the watcher
                    break;
                }
            }
        });

        Ok(Self { _watcher: watcher })
    }
}

fn is_relevant(event: &Event, targets: &[WatchTarget]) -> bool {
    let hit = event
        .paths
        .iter()
        .any(|p| targets.iter().any(|t| t.matches(p)));
    if !hit {
        debug!("Ignoring change to unrelated paths: {:?}", event.paths);
    }
    hit
}

/// Canonical form when the path resolves, otherwise joined onto the
/// working directory. Events carry absolute paths.
fn absolute(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    })
}
