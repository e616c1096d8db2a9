//! Portfolio orchestrator
//!
//! Owns the document and drives the one-shot pipeline:
//! load data -> render sections -> wire interactions -> start reveal.
//! Any failure is caught here, logged, and recorded as a diagnostic; the
//! document keeps its skeleton state.

use crate::config::SiteConfig;
use crate::dom::{Document, NodeId};
use crate::error::{Result, SiteError};
use crate::interaction::{Effects, Event, Interactions};
use crate::loader::{load_site_data, Fetch, SiteData};
use crate::render::render_all;
use crate::reveal::{IntersectionEntry, Layout, RevealAnimator, Viewport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitStatus {
    Ready,
    Failed,
    /// `init` was already called on this app; nothing was done.
    AlreadyInitialized,
}

struct Live {
    data: SiteData,
    interactions: Interactions,
    reveal: RevealAnimator,
}

pub struct PortfolioApp {
    document: Document,
    config: SiteConfig,
    started: bool,
    live: Option<Live>,
    diagnostics: Vec<String>,
}

impl PortfolioApp {
    pub fn new(document: Document, config: SiteConfig) -> Self {
        Self {
            document,
            config,
            started: false,
            live: None,
            diagnostics: Vec::new(),
        }
    }

    /// Run the pipeline once. Later calls are rejected without touching
    /// the document.
    pub async fn init<F: Fetch>(&mut self, fetcher: &F) -> InitStatus {
        if self.started {
            self.record(&SiteError::AlreadyInitialized);
            return InitStatus::AlreadyInitialized;
        }
        self.started = true;

        match self.run(fetcher).await {
            Ok(live) => {
                self.live = Some(live);
                tracing::info!("Portfolio initialized");
                InitStatus::Ready
            }
            Err(e) => {
                self.record(&e);
                InitStatus::Failed
            }
        }
    }

    async fn run<F: Fetch>(&mut self, fetcher: &F) -> Result<Live> {
        let data = load_site_data(fetcher).await?;
        render_all(&mut self.document, &data)?;
        let interactions = Interactions::wire(&self.document, &self.config);
        let reveal = RevealAnimator::start(&mut self.document, &self.config);
        Ok(Live {
            data,
            interactions,
            reveal,
        })
    }

    fn record(&mut self, error: &SiteError) {
        tracing::error!("Error initializing portfolio: {}", error);
        self.diagnostics.push(error.to_string());
    }

    pub fn is_ready(&self) -> bool {
        self.live.is_some()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn data(&self) -> Option<&SiteData> {
        self.live.as_ref().map(|l| &l.data)
    }

    pub fn diagnostics(&self) -> &[String] {
        &self.diagnostics
    }

    /// Forward a click or scroll. Ignored until the app is ready.
    pub fn handle_event(&mut self, event: Event) -> Effects {
        match &self.live {
            Some(live) => live.interactions.dispatch(&mut self.document, event),
            None => Effects::default(),
        }
    }

    /// Host-reported intersection changes. Returns newly revealed targets.
    pub fn handle_intersections(&mut self, entries: &[IntersectionEntry]) -> Vec<NodeId> {
        match &mut self.live {
            Some(live) => live.reveal.handle_entries(&mut self.document, entries),
            None => Vec::new(),
        }
    }

    /// Recompute intersections from layout. Returns newly revealed targets.
    pub fn update_viewport<L: Layout>(&mut self, viewport: Viewport, layout: &L) -> Vec<NodeId> {
        match &mut self.live {
            Some(live) => live.reveal.update(&mut self.document, viewport, layout),
            None => Vec::new(),
        }
    }
}
