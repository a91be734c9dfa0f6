//! File-backed stand-ins for the microphone and speaker, used when the
//! assistant runs headless.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tracing::{debug, info};
use vigil_assistant::{ActiveCapture, AudioClip, AudioPlayer, CaptureDevice};
use vigil_common::DeviceError;

/// Replays the `.wav` files of a directory, one per capture, in name order.
/// Runs dry after the last clip, which ends the session like a missing
/// microphone would.
pub struct DirectoryCapture {
    clips: Mutex<VecDeque<PathBuf>>,
}

impl DirectoryCapture {
    pub async fn open(dir: &Path) -> Result<Self, DeviceError> {
        let unavailable = |e: std::io::Error| DeviceError::Unavailable(format!("{}: {e}", dir.display()));
        let mut entries = tokio::fs::read_dir(dir).await.map_err(unavailable)?;

        let mut clips = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(unavailable)? {
            let path = entry.path();
            let is_wav = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("wav"));
            if is_wav {
                clips.push(path);
            }
        }
        clips.sort();

        if clips.is_empty() {
            return Err(DeviceError::Unavailable(format!(
                "no .wav clips in {}",
                dir.display()
            )));
        }
        info!(dir = %dir.display(), count = clips.len(), "clip directory opened");
        Ok(Self {
            clips: Mutex::new(clips.into()),
        })
    }
}

#[async_trait]
impl CaptureDevice for DirectoryCapture {
    async fn acquire(&self) -> Result<Box<dyn ActiveCapture>, DeviceError> {
        let next = self
            .clips
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .pop_front();
        let path = next.ok_or_else(|| DeviceError::Unavailable("clip directory exhausted".into()))?;

        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|e| DeviceError::Unavailable(format!("{}: {e}", path.display())))?;
        debug!(clip = %path.display(), size = bytes.len(), "replaying clip");
        Ok(Box::new(ClipCapture { bytes }))
    }
}

struct ClipCapture {
    bytes: Vec<u8>,
}

#[async_trait]
impl ActiveCapture for ClipCapture {
    /// A recorded clip is already complete.
    async fn ended(&mut self) {}

    fn stop(self: Box<Self>) -> AudioClip {
        AudioClip::wav(self.bytes)
    }
}

/// Writes each spoken reply to `reply-NNN.mp3`, or discards it when no
/// directory was given.
pub struct FileReplyPlayer {
    dir: Option<PathBuf>,
    written: AtomicUsize,
}

impl FileReplyPlayer {
    pub fn new(dir: Option<PathBuf>) -> Self {
        Self {
            dir,
            written: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl AudioPlayer for FileReplyPlayer {
    async fn play(&self, audio: &[u8]) -> Result<(), DeviceError> {
        let Some(dir) = &self.dir else {
            debug!(size = audio.len(), "reply audio discarded");
            return Ok(());
        };
        let n = self.written.fetch_add(1, Ordering::SeqCst) + 1;
        let path = dir.join(format!("reply-{n:03}.mp3"));
        tokio::fs::write(&path, audio)
            .await
            .map_err(|e| DeviceError::Playback(format!("{}: {e}", path.display())))?;
        info!(path = %path.display(), size = audio.len(), "reply audio written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn replays_wavs_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("02.wav"), b"second").unwrap();
        std::fs::write(dir.path().join("01.WAV"), b"first").unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"skip").unwrap();

        let device = DirectoryCapture::open(dir.path()).await.unwrap();

        let first = device.acquire().await.unwrap().stop();
        assert_eq!(first.bytes, b"first");
        assert_eq!(first.mime, "audio/wav");
        let second = device.acquire().await.unwrap().stop();
        assert_eq!(second.bytes, b"second");

        let err = device.acquire().await.err().unwrap();
        assert!(matches!(err, DeviceError::Unavailable(_)));
    }

    #[tokio::test]
    async fn empty_directory_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            DirectoryCapture::open(dir.path()).await,
            Err(DeviceError::Unavailable(_))
        ));
    }

    #[tokio::test]
    async fn missing_directory_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("clips");
        assert!(matches!(
            DirectoryCapture::open(&missing).await,
            Err(DeviceError::Unavailable(_))
        ));
    }

    #[tokio::test]
    async fn replies_are_numbered() {
        let dir = tempfile::tempdir().unwrap();
        let player = FileReplyPlayer::new(Some(dir.path().to_path_buf()));
        player.play(b"one").await.unwrap();
        player.play(b"two").await.unwrap();
        assert_eq!(std::fs::read(dir.path().join("reply-002.mp3")).unwrap(), b"two");
    }

    #[tokio::test]
    async fn player_without_directory_discards() {
        let player = FileReplyPlayer::new(None);
        assert!(player.play(b"speech").await.is_ok());
    }
}
