//! Media device seams: microphone capture and speech playback.

use async_trait::async_trait;
use vigil_common::DeviceError;

/// A finished recording ready for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioClip {
    pub bytes: Vec<u8>,
    pub mime: String,
}

impl AudioClip {
    pub fn wav(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            mime: "audio/wav".to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// A microphone that can be opened for exclusive recording.
#[async_trait]
pub trait CaptureDevice: Send + Sync {
    /// Open the device and start recording.
    ///
    /// Fails when the device is missing or permission is denied; the loop
    /// treats that as fatal for the session.
    async fn acquire(&self) -> Result<Box<dyn ActiveCapture>, DeviceError>;
}

/// An open recording. Holding one means holding the device.
#[async_trait]
pub trait ActiveCapture: Send {
    /// Resolves if the device finishes on its own before the capture window
    /// elapses. Live microphones never do.
    async fn ended(&mut self) {
        std::future::pending::<()>().await
    }

    /// Stop recording and release the device, returning what was buffered.
    /// Consuming `self` makes a second release impossible.
    fn stop(self: Box<Self>) -> AudioClip;
}

/// Plays synthesized speech.
#[async_trait]
pub trait AudioPlayer: Send + Sync {
    /// Resolves once playback has ended.
    async fn play(&self, audio: &[u8]) -> Result<(), DeviceError>;
}
