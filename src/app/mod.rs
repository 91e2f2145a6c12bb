mod state;
mod ui;

use crate::error::UploadError;
use crate::ingest::{self, BufferSource, FileSource, PathSource};
use crate::upload::{IngestEvent, UploadClient, UploadEvent, UploadPayload};
use eframe::{egui, App};
use std::path::Path;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::time::Instant;

use state::WidgetState;

pub struct TextUploader {
    state: WidgetState,
    client: UploadClient,
    was_hovering: bool,
    ingest_tx: Sender<IngestEvent>,
    ingest_rx: Receiver<IngestEvent>,
    upload_tx: Sender<UploadEvent>,
    upload_rx: Receiver<UploadEvent>,
}

impl TextUploader {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        log::info!("Initializing text file uploader");
        Self::with_client(UploadClient::new())
    }

    fn with_client(client: UploadClient) -> Self {
        let (ingest_tx, ingest_rx) = channel();
        let (upload_tx, upload_rx) = channel();
        Self {
            state: WidgetState::default(),
            client,
            was_hovering: false,
            ingest_tx,
            ingest_rx,
            upload_tx,
            upload_rx,
        }
    }

    /// Validates the declared type, then reads off the UI thread. A type
    /// mismatch is reported immediately and nothing is read.
    pub fn ingest(&mut self, source: impl FileSource + 'static) {
        if let Err(e) = ingest::validate(&source) {
            self.state.notify_error(e.to_string(), Instant::now());
            return;
        }

        let generation = self.state.begin_read();
        let sender = self.ingest_tx.clone();
        std::thread::spawn(move || {
            let result = source.read_text();
            sender
                .send(IngestEvent {
                    generation,
                    file_name: source.name().to_string(),
                    result,
                })
                .unwrap_or_default();
        });
    }

    pub fn start_upload(&mut self) {
        let content = match self.state.file_content.as_deref() {
            Some(c) if !c.is_empty() => c.to_string(),
            _ => {
                self.state
                    .notify_error(UploadError::NothingToUpload.to_string(), Instant::now());
                return;
            }
        };
        if self.state.file_name.is_empty() {
            self.state
                .notify_error(UploadError::NothingToUpload.to_string(), Instant::now());
            return;
        }

        log::info!("Starting upload process...");
        let payload = UploadPayload {
            content,
            file_name: self.state.file_name.clone(),
        };
        let generation = self.state.begin_upload();
        let client = self.client.clone();
        let sender = self.upload_tx.clone();

        std::thread::spawn(move || {
            let rt = tokio::runtime::Runtime::new().unwrap();
            let result = rt.block_on(client.upload(&payload));
            sender
                .send(UploadEvent { generation, result })
                .unwrap_or_default();
        });
    }

    pub fn reset_file(&mut self) {
        self.state.reset_file();
    }

    /// Translates egui's per-frame file hover/drop input into drag events.
    fn collect_drag_input(&mut self, ctx: &egui::Context) {
        let (hovered, dropped) =
            ctx.input(|i| (i.raw.hovered_files.len(), i.raw.dropped_files.clone()));

        if !dropped.is_empty() {
            self.handle_drop(dropped);
            return;
        }

        let hovering = hovered > 0;
        if hovering && !self.was_hovering {
            self.state.drag_entered(hovered);
        } else if !hovering && self.was_hovering {
            self.state.drag_left();
        }
        self.was_hovering = hovering;
    }

    /// Only the first file of a multi-file drop is considered.
    fn handle_drop(&mut self, dropped: Vec<egui::DroppedFile>) {
        self.state.drag_dropped();
        self.was_hovering = false;
        if let Some(file) = dropped.into_iter().next() {
            self.ingest_dropped(file);
        }
    }

    fn ingest_dropped(&mut self, file: egui::DroppedFile) {
        if let Some(path) = file.path {
            self.ingest(PathSource::new(path));
        } else if let Some(bytes) = file.bytes {
            let mime = ingest::mime_for_path(Path::new(&file.name));
            self.ingest(BufferSource::new(file.name, mime, bytes.to_vec()));
        } else {
            log::warn!("Dropped file carried neither path nor bytes");
        }
    }

    fn apply_ingest_event(&mut self, event: IngestEvent, now: Instant) {
        if !self.state.is_current_read(event.generation) {
            log::debug!("Dropping stale read result for {}", event.file_name);
            return;
        }
        match event.result {
            Ok(content) => {
                self.state.set_loaded(event.file_name, content);
                self.state.notify_success("File loaded successfully!", now);
            }
            Err(e) => {
                log::warn!("Failed to read {}: {}", event.file_name, e);
                self.state.notify_error(e.to_string(), now);
            }
        }
    }

    fn apply_upload_event(&mut self, event: UploadEvent, now: Instant) {
        if !self.state.is_current_upload(event.generation) {
            log::debug!("Dropping stale upload result");
            return;
        }
        self.state.finish_upload();
        match event.result {
            Ok(file_name) => {
                self.state
                    .notify_success(format!("File uploaded successfully as {}", file_name), now);
            }
            Err(e) => {
                log::warn!("Upload failed: {}", e);
                self.state.notify_error(e.to_string(), now);
            }
        }
    }

    fn drain_events(&mut self) -> bool {
        let now = Instant::now();
        let mut had_updates = false;
        while let Ok(event) = self.ingest_rx.try_recv() {
            self.apply_ingest_event(event, now);
            had_updates = true;
        }
        while let Ok(event) = self.upload_rx.try_recv() {
            self.apply_upload_event(event, now);
            had_updates = true;
        }
        had_updates
    }
}

impl App for TextUploader {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.drain_events() {
            ctx.request_repaint();
        }
        self.collect_drag_input(ctx);

        let now = Instant::now();
        self.state.expire_notification(now);
        if let Some(remaining) = self.state.notification_remaining(now) {
            ctx.request_repaint_after(remaining);
        }

        self.render(ctx);
    }
}
