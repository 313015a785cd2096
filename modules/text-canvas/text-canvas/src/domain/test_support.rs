//! In-memory collaborators shared by the domain and handler tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread::ThreadId;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use text_canvas_sdk::{Canvas, CanvasFlag, NewSettings, Settings};
use time::OffsetDateTime;
use uuid::Uuid;

use super::error::DomainError;
use super::layout::LayoutParams;
use super::repo::{CanvasRepository, SettingsRepository};
use super::surface::{DrawingSurface, Typesetter};

#[derive(Default)]
pub struct InMemorySettingsRepository {
    rows: Mutex<Vec<Settings>>,
    writes: AtomicUsize,
}

impl InMemorySettingsRepository {
    pub fn with_rows(rows: Vec<Settings>) -> Self {
        Self {
            rows: Mutex::new(rows),
            writes: AtomicUsize::new(0),
        }
    }

    pub fn rows(&self) -> Vec<Settings> {
        self.rows.lock().clone()
    }

    /// Number of mutating calls received.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn touch(&self) {
        self.writes.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl SettingsRepository for InMemorySettingsRepository {
    async fn list(&self) -> anyhow::Result<Vec<Settings>> {
        Ok(self.rows())
    }

    async fn find(&self, id: Uuid) -> anyhow::Result<Option<Settings>> {
        Ok(self.rows.lock().iter().find(|s| s.id == id).cloned())
    }

    async fn find_default(&self) -> anyhow::Result<Option<Settings>> {
        Ok(self.rows.lock().iter().find(|s| s.is_default).cloned())
    }

    async fn insert(&self, settings: Settings) -> anyhow::Result<Settings> {
        self.touch();
        self.rows.lock().push(settings.clone());
        Ok(settings)
    }

    async fn update(&self, settings: Settings) -> anyhow::Result<Settings> {
        self.touch();
        let mut rows = self.rows.lock();
        let slot = rows
            .iter_mut()
            .find(|s| s.id == settings.id)
            .ok_or_else(|| anyhow::anyhow!("record vanished"))?;
        *slot = settings.clone();
        Ok(settings)
    }

    async fn set_default(&self, id: Uuid) -> anyhow::Result<Option<Settings>> {
        let mut rows = self.rows.lock();
        if !rows.iter().any(|s| s.id == id) {
            return Ok(None);
        }
        self.touch();
        let mut chosen = None;
        for row in rows.iter_mut() {
            row.is_default = row.id == id;
            if row.is_default {
                chosen = Some(row.clone());
            }
        }
        Ok(chosen)
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        let mut rows = self.rows.lock();
        let before = rows.len();
        rows.retain(|s| s.id != id);
        if rows.len() == before {
            return Ok(false);
        }
        self.touch();
        Ok(true)
    }
}

#[derive(Default)]
pub struct InMemoryCanvasRepository {
    rows: Mutex<Vec<Canvas>>,
    fail_inserts: bool,
    insert_delay: Option<Duration>,
}

impl InMemoryCanvasRepository {
    pub fn failing() -> Self {
        Self {
            fail_inserts: true,
            ..Self::default()
        }
    }

    /// Inserts sleep for `delay` before storing the row.
    pub fn with_insert_delay(delay: Duration) -> Self {
        Self {
            insert_delay: Some(delay),
            ..Self::default()
        }
    }

    pub fn rows(&self) -> Vec<Canvas> {
        self.rows.lock().clone()
    }
}

#[async_trait]
impl CanvasRepository for InMemoryCanvasRepository {
    async fn insert(&self, canvas: Canvas) -> anyhow::Result<Canvas> {
        if let Some(delay) = self.insert_delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_inserts {
            anyhow::bail!("database is unavailable");
        }
        self.rows.lock().push(canvas.clone());
        Ok(canvas)
    }

    async fn list(&self) -> anyhow::Result<Vec<Canvas>> {
        let mut rows = self.rows();
        rows.reverse();
        Ok(rows)
    }

    async fn set_flag(&self, id: Uuid, flag: CanvasFlag) -> anyhow::Result<Option<Canvas>> {
        let mut rows = self.rows.lock();
        let Some(row) = rows.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };
        match flag {
            CanvasFlag::Accepted => row.accepted = true,
            CanvasFlag::Completed => row.completed = true,
        }
        Ok(Some(row.clone()))
    }
}

/// Threads that called `encode_png`, in call order.
pub type EncodeLog = Arc<Mutex<Vec<ThreadId>>>;

/// Surface returning a fixed 1x1 PNG, or failing to encode.
pub struct StaticSurface {
    broken: bool,
    encode_log: Option<EncodeLog>,
}

impl StaticSurface {
    pub fn png() -> Self {
        Self {
            broken: false,
            encode_log: None,
        }
    }

    pub fn broken() -> Self {
        Self {
            broken: true,
            encode_log: None,
        }
    }
}

impl DrawingSurface for StaticSurface {
    fn width(&self) -> u32 {
        1
    }

    fn height(&self) -> u32 {
        1
    }

    fn encode_png(&self) -> Result<Vec<u8>, DomainError> {
        if let Some(log) = &self.encode_log {
            log.lock().push(std::thread::current().id());
        }
        if self.broken {
            return Err(DomainError::Render("surface is broken".to_owned()));
        }
        let mut buf = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buf, 1, 1);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder
                .write_header()
                .map_err(|e| DomainError::Render(e.to_string()))?;
            writer
                .write_image_data(&[255, 255, 255, 255])
                .map_err(|e| DomainError::Render(e.to_string()))?;
        }
        Ok(buf)
    }
}

/// Typesetter that records the layout it was asked for and returns a 1x1 surface.
#[derive(Default)]
pub struct RecordingTypesetter {
    pub calls: Mutex<Vec<(String, LayoutParams)>>,
    pub overflow: bool,
    pub encodes: EncodeLog,
}

impl Typesetter for RecordingTypesetter {
    fn typeset(
        &self,
        text: &str,
        params: &LayoutParams,
    ) -> Result<Box<dyn DrawingSurface>, DomainError> {
        self.calls.lock().push((text.to_owned(), *params));
        if self.overflow {
            return Err(DomainError::TextOverflow);
        }
        Ok(Box::new(StaticSurface {
            broken: false,
            encode_log: Some(Arc::clone(&self.encodes)),
        }))
    }
}

pub fn new_settings(name: &str) -> NewSettings {
    NewSettings {
        name: name.to_owned(),
        min_font_size: 66,
        max_font_size: 114,
        line_space: 40,
        word_space: 20,
        canvas_height: 2430,
        canvas_width: 1770,
        padding: 120,
    }
}

pub fn stored_settings(name: &str, is_default: bool) -> Settings {
    let mut s = Settings::from_new(Uuid::new_v4(), new_settings(name), OffsetDateTime::now_utc());
    s.is_default = is_default;
    s
}
