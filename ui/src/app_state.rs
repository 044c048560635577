use catalog::SiteConfig;
use catalog::SiteContent;
use std::ops::Deref;
use std::sync::Arc;

#[derive(Debug, PartialEq)]
pub struct AppStateData {
    pub content: SiteContent,
    pub config: SiteConfig,
}

/// The site's immutable data, provided once as context at the root.
///
/// Cloning only bumps a reference count.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(content: SiteContent, config: SiteConfig) -> Self {
        Self(Arc::new(AppStateData { content, config }))
    }
}
