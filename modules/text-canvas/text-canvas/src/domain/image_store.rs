//! Persists rendered surfaces as PNG files and records their canvas metadata.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use sha2::{Digest, Sha256};
use text_canvas_sdk::Canvas;
use time::OffsetDateTime;
use tokio::io::AsyncWriteExt;
use tracing::{Instrument, Span, error, info, instrument, warn};
use uuid::Uuid;

use super::error::DomainError;
use super::repo::CanvasRepository;
use super::surface::DrawingSurface;

/// Wall-clock milliseconds that strictly increase across calls.
///
/// Two saves within the same millisecond get distinct stamps, so the same
/// text never hashes to the same filename twice in one process.
#[derive(Debug, Default)]
pub struct MonotonicMillis {
    last: AtomicI64,
}

impl MonotonicMillis {
    pub fn next_millis(&self) -> i64 {
        let now = now_millis();
        let mut prev = self.last.load(Ordering::Acquire);
        loop {
            let candidate = if now > prev { now } else { prev + 1 };
            match self
                .last
                .compare_exchange_weak(prev, candidate, Ordering::AcqRel, Ordering::Acquire)
            {
                Ok(_) => return candidate,
                Err(actual) => prev = actual,
            }
        }
    }
}

fn now_millis() -> i64 {
    let millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
    i64::try_from(millis).unwrap_or(i64::MAX)
}

/// Hex SHA-256 of the text followed by the decimal millisecond stamp.
#[must_use]
pub fn image_hash(user_input: &str, millis: i64) -> String {
    let mut hasher = Sha256::new();
    hasher.update(user_input.as_bytes());
    hasher.update(millis.to_string().as_bytes());
    hex::encode(hasher.finalize())
}

pub struct ImageStore {
    output_path: PathBuf,
    canvases: Arc<dyn CanvasRepository>,
    clock: MonotonicMillis,
}

impl ImageStore {
    pub fn new(output_path: impl Into<PathBuf>, canvases: Arc<dyn CanvasRepository>) -> Self {
        Self {
            output_path: output_path.into(),
            canvases,
            clock: MonotonicMillis::default(),
        }
    }

    #[must_use]
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Absolute location of the PNG named by `hash`.
    #[must_use]
    pub fn image_path(&self, hash: &str) -> PathBuf {
        self.output_path.join(format!("{hash}.png"))
    }

    /// Save `surface` and return the filename hash.
    ///
    /// # Errors
    /// See [`ImageStore::save_record`].
    pub async fn save(
        &self,
        surface: &dyn DrawingSurface,
        user_input: &str,
        settings_id: Option<Uuid>,
    ) -> Result<String, DomainError> {
        self.save_record(surface, user_input, settings_id)
            .await
            .map(|canvas| canvas.filename)
    }

    /// Encode `surface` and persist it with [`ImageStore::save_png`].
    ///
    /// Encoding runs on the calling thread; async callers holding a large
    /// surface should encode on a blocking thread and call `save_png`.
    ///
    /// # Errors
    /// `DomainError::Render` if the surface cannot be encoded, otherwise
    /// see [`ImageStore::save_png`].
    pub async fn save_record(
        &self,
        surface: &dyn DrawingSurface,
        user_input: &str,
        settings_id: Option<Uuid>,
    ) -> Result<Canvas, DomainError> {
        let png = surface.encode_png()?;
        self.save_png(png, user_input, settings_id).await
    }

    /// Write encoded PNG bytes, confirm they are on disk, then insert the
    /// canvas record.
    ///
    /// The write and insert run on a spawned task that finishes even if
    /// this future is dropped, so a cancelled request still ends with both
    /// the file and its row, or with neither.
    ///
    /// # Errors
    /// `DomainError::Storage` if the directory or file cannot be written
    /// (no record is inserted), `DomainError::Database` if the insert
    /// fails (the written file is removed).
    #[instrument(skip(self, png, user_input), fields(settings_id = ?settings_id))]
    pub async fn save_png(
        &self,
        png: Vec<u8>,
        user_input: &str,
        settings_id: Option<Uuid>,
    ) -> Result<Canvas, DomainError> {
        let hash = image_hash(user_input, self.clock.next_millis());
        let canvas = Canvas {
            id: Uuid::now_v7(),
            filename: hash,
            user_input: user_input.to_owned(),
            created_at: OffsetDateTime::now_utc(),
            accepted: false,
            completed: false,
            settings_id,
        };
        let job = PersistJob {
            output_path: self.output_path.clone(),
            path: self.image_path(&canvas.filename),
            png,
            canvas,
            canvases: Arc::clone(&self.canvases),
        };

        tokio::spawn(job.run().instrument(Span::current()))
            .await
            .map_err(|e| DomainError::Storage(format!("image save task failed: {e}")))?
    }
}

struct PersistJob {
    output_path: PathBuf,
    path: PathBuf,
    png: Vec<u8>,
    canvas: Canvas,
    canvases: Arc<dyn CanvasRepository>,
}

impl PersistJob {
    async fn run(self) -> Result<Canvas, DomainError> {
        let path = self.path;
        if let Err(e) = write_png(&self.output_path, &path, &self.png).await {
            error!(path = %path.display(), error = %e, "Failed to write PNG file");
            return Err(DomainError::Storage(format!(
                "failed to write {}: {e}",
                path.display()
            )));
        }
        info!(path = %path.display(), bytes = self.png.len(), "PNG file was created");

        match self.canvases.insert(self.canvas).await {
            Ok(saved) => Ok(saved),
            Err(e) => {
                if let Err(rm) = tokio::fs::remove_file(&path).await {
                    warn!(path = %path.display(), error = %rm, "Failed to remove orphaned PNG file");
                }
                Err(DomainError::Database(e))
            }
        }
    }
}

async fn write_png(dir: &Path, path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    tokio::fs::create_dir_all(dir).await?;
    let mut file = tokio::fs::File::create(path).await?;
    file.write_all(bytes).await?;
    file.flush().await?;
    file.sync_all().await
}
