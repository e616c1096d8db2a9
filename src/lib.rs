//! Portfolio Site
//!
//! Loads the four portfolio data documents (profile, experience, projects,
//! publications) and renders them into a page skeleton, then wires the
//! page's interactive behaviour.
//!
//! - `loader/`: concurrent, all-or-nothing data loading
//! - `dom/`: host document model with escaping serializer
//! - `render/`: one renderer per section
//! - `interaction/`: nav menu, smooth-scroll and navbar shadow
//! - `reveal/`: scroll-triggered reveal with staggered delays
//! - `app/`: the orchestrator tying it together

pub mod app;
pub mod config;
pub mod dom;
pub mod error;
pub mod interaction;
pub mod loader;
pub mod model;
pub mod render;
pub mod reveal;
pub mod skeleton;

// Re-export commonly used types
pub use app::{InitStatus, PortfolioApp};
pub use config::SiteConfig;
pub use dom::{Document, El, NodeId};
pub use error::{Result, SiteError};
pub use interaction::{Effects, Event, Interactions};
pub use loader::{load_site_data, Fetch, FsFetcher, MemoryFetcher, Resource, SiteData};
pub use model::{Education, Experience, Profile, Project, Publication, SocialLink};
pub use reveal::{IntersectionEntry, Layout, Rect, RevealAnimator, Viewport};
pub use skeleton::standard_skeleton;
