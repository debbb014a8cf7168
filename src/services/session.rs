use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use super::location::LocationResolver;
use super::photo::{PhotoAcquirer, PhotoOutcome};
use crate::libraries::assembler::assemble;
use crate::models::{
    ImagePayload, LocationOutcome, Notice, PhotoSource, ReportDraft, ResolvedLocation,
    UnavailableReason,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PhotoState {
    Idle,
    Capturing,
    Captured {
        image: ImagePayload,
        source: PhotoSource,
    },
    Cancelled,
    Failed {
        error: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LocationState {
    Idle,
    Resolving,
    Resolved { location: ResolvedLocation },
    Unavailable { reason: UnavailableReason },
}

impl LocationState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, LocationState::Resolved { .. } | LocationState::Unavailable { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("Take a photo before submitting the report.")]
    PhotoMissing,

    #[error("Still determining your location.")]
    LocationPending,
}

#[derive(Debug)]
struct SessionState {
    photo: PhotoState,
    location: LocationState,
    notices: Vec<Notice>,
}

/// Holds the photo and location state machines for one report screen.
///
/// Every attempt takes a token from its stage's counter and only writes its
/// result if no newer attempt has started since.
#[derive(Clone)]
pub struct ReportSession {
    acquirer: PhotoAcquirer,
    resolver: LocationResolver,
    state: Arc<RwLock<SessionState>>,
    photo_attempts: Arc<AtomicU64>,
    location_attempts: Arc<AtomicU64>,
}

impl ReportSession {
    pub fn new(acquirer: PhotoAcquirer, resolver: LocationResolver) -> Self {
        Self {
            acquirer,
            resolver,
            state: Arc::new(RwLock::new(SessionState {
                photo: PhotoState::Idle,
                location: LocationState::Idle,
                notices: Vec::new(),
            })),
            photo_attempts: Arc::new(AtomicU64::new(0)),
            location_attempts: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Screen entry: resolve the location in the background
    pub fn begin(&self) -> JoinHandle<LocationState> {
        let session = self.clone();
        tokio::spawn(async move { session.locate().await })
    }

    /// Run one photo gesture and return the photo state afterwards
    pub async fn capture_photo(&self) -> PhotoState {
        let token = self.photo_attempts.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.write().await.photo = PhotoState::Capturing;

        let acquisition = self.acquirer.acquire().await;

        let mut state = self.state.write().await;
        if self.photo_attempts.load(Ordering::SeqCst) != token {
            debug!("Dropping stale photo attempt {}", token);
            return state.photo.clone();
        }

        state.photo = match acquisition.outcome {
            PhotoOutcome::Captured { image, source } => {
                state.notices.push(Notice::photo_ready(source));
                PhotoState::Captured { image, source }
            }
            PhotoOutcome::Cancelled => PhotoState::Cancelled,
            PhotoOutcome::Failed { error } => PhotoState::Failed {
                error: error.to_string(),
            },
        };
        state.photo.clone()
    }

    /// Run one location resolution and return the location state afterwards
    pub async fn locate(&self) -> LocationState {
        let token = self.location_attempts.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.write().await.location = LocationState::Resolving;

        let outcome = self.resolver.resolve().await;

        let mut state = self.state.write().await;
        if self.location_attempts.load(Ordering::SeqCst) != token {
            debug!("Dropping stale location attempt {}", token);
            return state.location.clone();
        }

        state.location = match outcome {
            LocationOutcome::Resolved(location) => LocationState::Resolved { location },
            LocationOutcome::Unavailable { reason } => {
                state.notices.push(Notice::location_unavailable(reason));
                LocationState::Unavailable { reason }
            }
        };
        state.location.clone()
    }

    /// Discard the current photo so the user can take another one.
    /// Any in-flight attempt is invalidated.
    pub async fn retake(&self) {
        self.photo_attempts.fetch_add(1, Ordering::SeqCst);
        self.state.write().await.photo = PhotoState::Idle;
    }

    pub async fn photo(&self) -> PhotoState {
        self.state.read().await.photo.clone()
    }

    pub async fn location(&self) -> LocationState {
        self.state.read().await.location.clone()
    }

    /// Notices raised since the last call, oldest first
    pub async fn drain_notices(&self) -> Vec<Notice> {
        std::mem::take(&mut self.state.write().await.notices)
    }

    /// Hand out the draft once a photo is captured and the location stage
    /// has settled either way
    pub async fn confirm(&self) -> Result<ReportDraft, SessionError> {
        let state = self.state.read().await;

        let PhotoState::Captured { image, .. } = &state.photo else {
            return Err(SessionError::PhotoMissing);
        };

        let location = match &state.location {
            LocationState::Resolved { location } => LocationOutcome::Resolved(location.clone()),
            LocationState::Unavailable { reason } => LocationOutcome::unavailable(*reason),
            LocationState::Idle | LocationState::Resolving => {
                return Err(SessionError::LocationPending)
            }
        };

        let draft = assemble(image.clone(), location);
        info!(
            "Report draft {} ready (location: {})",
            draft.id,
            draft
                .location
                .as_ref()
                .map(|l| l.label())
                .unwrap_or_else(|| "none".to_string())
        );
        Ok(draft)
    }
}
