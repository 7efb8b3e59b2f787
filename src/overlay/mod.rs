// Copyright 2025 QuakeMap Desktop Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Data overlays drawn on top of the basemap.
//!
//! Each overlay owns a shared load state written exactly once by a
//! background fetch. A failed or hung fetch leaves only its own overlay
//! empty; the rest of the map keeps working.

pub mod earthquakes;
pub mod plates;

use std::future::Future;
use std::sync::{Arc, Mutex};

use eframe::egui;
use log::{error, info};
use quake_feed::FeedError;

/// Load state of one overlay. Written once per process lifetime; there is
/// no retry or refresh.
#[derive(Debug)]
pub enum OverlayState<T> {
    /// Fetch in flight (or never resolving).
    Loading,
    /// Fetch completed; features are shared so per-frame snapshots are cheap.
    Ready(Arc<Vec<T>>),
    /// Fetch or decode failed. Non-fatal; surfaced in the layer control.
    Failed(String),
}

impl<T> Clone for OverlayState<T> {
    fn clone(&self) -> Self {
        match self {
            OverlayState::Loading => OverlayState::Loading,
            OverlayState::Ready(items) => OverlayState::Ready(Arc::clone(items)),
            OverlayState::Failed(reason) => OverlayState::Failed(reason.clone()),
        }
    }
}

/// Shared handle to an overlay's load state.
#[derive(Debug)]
pub struct OverlayHandle<T> {
    state: Arc<Mutex<OverlayState<T>>>,
}

impl<T> Clone for OverlayHandle<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<T> Default for OverlayHandle<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> OverlayHandle<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(OverlayState::Loading)),
        }
    }

    /// Snapshot the current state. Cheap: ready features are behind an `Arc`.
    #[must_use]
    pub fn snapshot(&self) -> OverlayState<T> {
        self.state.lock().expect("overlay state mutex poisoned").clone()
    }

    fn complete(&self, state: OverlayState<T>) {
        *self.state.lock().expect("overlay state mutex poisoned") = state;
    }
}

/// Run one feed fetch on a background thread and publish the result.
///
/// The future is driven by a dedicated single-thread tokio runtime so the
/// UI thread never blocks. The handle is written exactly once, then a
/// repaint is requested so the overlay appears as soon as data lands.
pub fn spawn_fetch<T, Fut>(
    handle: &OverlayHandle<T>,
    ctx: egui::Context,
    label: &'static str,
    fut: Fut,
) where
    T: Send + Sync + 'static,
    Fut: Future<Output = Result<Vec<T>, FeedError>> + Send + 'static,
{
    let handle = handle.clone();
    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("tokio runtime for feed fetch");

        match rt.block_on(fut) {
            Ok(items) => {
                info!("{label}: {} features loaded", items.len());
                handle.complete(OverlayState::Ready(Arc::new(items)));
            }
            Err(e) => {
                error!("{label}: {e}");
                handle.complete(OverlayState::Failed(e.to_string()));
            }
        }

        ctx.request_repaint();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_completes_once() {
        let handle: OverlayHandle<u32> = OverlayHandle::new();
        assert!(matches!(handle.snapshot(), OverlayState::Loading));

        handle.complete(OverlayState::Ready(Arc::new(vec![1, 2, 3])));
        match handle.snapshot() {
            OverlayState::Ready(items) => assert_eq!(items.len(), 3),
            other => panic!("unexpected state: {other:?}"),
        }
    }

    #[test]
    fn test_failure_is_isolated_per_overlay() {
        let plates: OverlayHandle<u32> = OverlayHandle::new();
        let quakes: OverlayHandle<u32> = OverlayHandle::new();

        plates.complete(OverlayState::Failed("HTTP 503".to_string()));
        quakes.complete(OverlayState::Ready(Arc::new(vec![9])));

        assert!(matches!(plates.snapshot(), OverlayState::Failed(_)));
        match quakes.snapshot() {
            OverlayState::Ready(items) => assert_eq!(*items, vec![9]),
            other => panic!("unexpected state: {other:?}"),
        }
    }

    #[test]
    fn test_snapshot_shares_features() {
        // Toggling an overlay off and on re-uses the loaded features; the
        // snapshot is a shared reference, not a refetch or a deep copy.
        let handle: OverlayHandle<u32> = OverlayHandle::new();
        handle.complete(OverlayState::Ready(Arc::new(vec![5; 1000])));

        let (a, b) = (handle.snapshot(), handle.snapshot());
        let (OverlayState::Ready(a), OverlayState::Ready(b)) = (a, b) else {
            panic!("expected ready snapshots");
        };
        assert!(Arc::ptr_eq(&a, &b));
    }
}
