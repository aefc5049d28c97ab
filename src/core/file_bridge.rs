//! Dialog and filesystem side of Open and Save.
//!
//! Each job awaits its dialog and then does the read or write on a tokio
//! runtime, so the window keeps repainting while either is pending.
//! Completions come back over a channel that the UI thread drains once per
//! frame.

use crate::core::dialogs::DialogFuture;
use crate::core::error::{FileError, FileResult};
use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use tokio::runtime::{Builder, Runtime};

/// Completion of a bridge job.
#[derive(Debug)]
pub enum FileEvent {
    Opened { path: PathBuf, contents: String },
    Saved { path: PathBuf, bytes: usize },
    /// The dialog was dismissed or returned nothing.
    Canceled,
    Failed(FileError),
}

type Waker = Arc<dyn Fn() + Send + Sync>;

/// Runs at most one dialog + file job at a time.
pub struct FileBridge {
    runtime: Runtime,
    sender: Sender<FileEvent>,
    receiver: Receiver<FileEvent>,
    pending: bool,
    waker: Option<Waker>,
}

impl FileBridge {
    pub fn new() -> io::Result<Self> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("file-bridge")
            .enable_all()
            .build()?;
        let (sender, receiver) = mpsc::channel();
        Ok(Self {
            runtime,
            sender,
            receiver,
            pending: false,
            waker: None,
        })
    }

    /// Bridge that calls `waker` after every completion, typically
    /// `Context::request_repaint`.
    pub fn with_waker(waker: impl Fn() + Send + Sync + 'static) -> io::Result<Self> {
        Ok(Self {
            waker: Some(Arc::new(waker)),
            ..Self::new()?
        })
    }

    pub fn is_busy(&self) -> bool {
        self.pending
    }

    /// Wait for the open dialog, then read the first selected path.
    /// Returns false if a job is already running.
    pub fn open(&mut self, picked: DialogFuture<Vec<PathBuf>>) -> bool {
        self.spawn(async move {
            let Some(path) = picked.await.and_then(|paths| paths.into_iter().next()) else {
                return FileEvent::Canceled;
            };
            match read_text(&path).await {
                Ok(contents) => FileEvent::Opened { path, contents },
                Err(e) => FileEvent::Failed(e),
            }
        })
    }

    /// Wait for the save dialog, then write `contents` to the chosen path.
    /// Returns false if a job is already running.
    pub fn save(&mut self, picked: DialogFuture<PathBuf>, contents: String) -> bool {
        self.spawn(async move {
            let Some(path) = picked.await else {
                return FileEvent::Canceled;
            };
            match write_text(&path, &contents).await {
                Ok(bytes) => FileEvent::Saved { path, bytes },
                Err(e) => FileEvent::Failed(e),
            }
        })
    }

    /// Non-blocking check for a finished job.
    pub fn poll(&mut self) -> Option<FileEvent> {
        let event = self.receiver.try_recv().ok()?;
        self.pending = false;
        Some(event)
    }

    /// Block until the running job finishes. `None` if nothing is running.
    #[cfg(test)]
    pub fn wait(&mut self) -> Option<FileEvent> {
        if !self.pending {
            return None;
        }
        let event = self.receiver.recv().ok()?;
        self.pending = false;
        Some(event)
    }

    fn spawn(&mut self, job: impl Future<Output = FileEvent> + Send + 'static) -> bool {
        if self.pending {
            log::debug!("File operation already in progress, ignoring request");
            return false;
        }
        self.pending = true;

        let sender = self.sender.clone();
        let waker = self.waker.clone();
        self.runtime.spawn(async move {
            let _ = sender.send(job.await);
            if let Some(wake) = waker {
                wake();
            }
        });
        true
    }
}

/// Read a whole file as UTF-8.
pub async fn read_text(path: &Path) -> FileResult<String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| FileError::Read {
            path: path.to_path_buf(),
            source,
        })
}

/// Write `contents` verbatim, replacing any existing file.
pub async fn write_text(path: &Path, contents: &str) -> FileResult<usize> {
    tokio::fs::write(path, contents)
        .await
        .map(|_| contents.len())
        .map_err(|source| FileError::Write {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio::sync::oneshot;

    fn answered<T: Send + 'static>(value: Option<T>) -> DialogFuture<T> {
        Box::pin(std::future::ready(value))
    }

    #[tokio::test]
    async fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_text(&dir.path().join("nope.txt")).await.unwrap_err();
        assert!(matches!(err, FileError::Read { .. }));
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_read_rejects_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binary.bin");
        fs::write(&path, [0xff, 0xfe, 0x00, 0x80]).unwrap();
        let err = read_text(&path).await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[tokio::test]
    async fn test_write_overwrites_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt");
        fs::write(&path, "a much longer previous body").unwrap();
        assert_eq!(write_text(&path, "short").await.unwrap(), 5);
        assert_eq!(fs::read_to_string(&path).unwrap(), "short");
    }

    #[test]
    fn test_save_then_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.txt");
        let body = "línea uno\nline two";
        let mut bridge = FileBridge::new().unwrap();

        assert!(bridge.save(answered(Some(path.clone())), body.to_string()));
        assert!(bridge.is_busy());
        match bridge.wait() {
            Some(FileEvent::Saved { path: saved, bytes }) => {
                assert_eq!(saved, path);
                assert_eq!(bytes, body.len());
            }
            other => panic!("unexpected event: {:?}", other),
        }
        assert!(!bridge.is_busy());

        assert!(bridge.open(answered(Some(vec![path.clone()]))));
        match bridge.wait() {
            Some(FileEvent::Opened { contents, .. }) => assert_eq!(contents, body),
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn test_canceled_dialogs() {
        let mut bridge = FileBridge::new().unwrap();
        bridge.open(answered(None));
        assert!(matches!(bridge.wait(), Some(FileEvent::Canceled)));
        bridge.open(answered(Some(Vec::new())));
        assert!(matches!(bridge.wait(), Some(FileEvent::Canceled)));
        bridge.save(answered(None), "dropped".to_string());
        assert!(matches!(bridge.wait(), Some(FileEvent::Canceled)));
    }

    #[test]
    fn test_pending_dialog_does_not_block_caller() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("later.txt");
        let (answer, picked) = oneshot::channel::<PathBuf>();
        let mut bridge = FileBridge::new().unwrap();

        assert!(bridge.save(Box::pin(async move { picked.await.ok() }), "x".to_string()));
        std::thread::sleep(Duration::from_millis(20));
        assert!(bridge.poll().is_none());
        assert!(bridge.is_busy());
        assert!(!path.exists());

        answer.send(path.clone()).unwrap();
        assert!(matches!(bridge.wait(), Some(FileEvent::Saved { .. })));
        assert_eq!(fs::read_to_string(&path).unwrap(), "x");
    }

    #[test]
    fn test_one_job_at_a_time() {
        let dir = tempfile::tempdir().unwrap();
        let mut bridge = FileBridge::new().unwrap();
        let second = dir.path().join("second.txt");
        assert!(bridge.save(answered(Some(dir.path().join("first.txt"))), "1".to_string()));
        assert!(!bridge.save(answered(Some(second.clone())), "2".to_string()));
        assert!(bridge.wait().is_some());
        assert!(!second.exists());
    }

    #[test]
    fn test_wait_without_job() {
        let mut bridge = FileBridge::new().unwrap();
        assert!(bridge.wait().is_none());
        assert!(bridge.poll().is_none());
    }

    #[test]
    fn test_waker_called_on_completion() {
        let dir = tempfile::tempdir().unwrap();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let mut bridge = FileBridge::with_waker(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();

        bridge.open(answered(Some(vec![dir.path().join("missing.txt")])));
        assert!(matches!(bridge.wait(), Some(FileEvent::Failed(_))));
        // The waker runs right after the send, so give it a moment.
        for _ in 0..100 {
            if calls.load(Ordering::SeqCst) == 1 {
                break;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
