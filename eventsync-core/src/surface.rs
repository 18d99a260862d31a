//! UI seams the sync controller drives.

use async_trait::async_trait;
use url::Url;

use crate::error::SyncResult;

/// The calendar view that owns event presentation.
///
/// A surface loads events from its own configured source. The controller
/// only ever asks it to render or to re-fetch everything.
#[async_trait]
pub trait DisplaySurface: Send {
    /// Initial load and draw.
    async fn render(&mut self) -> SyncResult<()>;

    /// Reload the full event set from the source and redraw.
    async fn refetch_events(&mut self) -> SyncResult<()>;
}

/// Blocking user dialogs.
pub trait Dialogs: Send {
    /// Ask a yes/no question. `false` means declined.
    fn confirm(&mut self, message: &str) -> bool;

    /// Show a message the user has to acknowledge.
    fn alert(&mut self, message: &str);
}

/// Hands a URL off to whatever loads documents (browser, downloader).
///
/// Navigation is a side effect. Nothing about the loaded document flows
/// back to the caller.
#[async_trait]
pub trait Navigator: Send {
    async fn navigate(&mut self, url: &Url) -> SyncResult<()>;
}

impl<T: Dialogs + ?Sized> Dialogs for Box<T> {
    fn confirm(&mut self, message: &str) -> bool {
        (**self).confirm(message)
    }

    fn alert(&mut self, message: &str) {
        (**self).alert(message)
    }
}

#[async_trait]
impl<T: Navigator + ?Sized> Navigator for Box<T> {
    async fn navigate(&mut self, url: &Url) -> SyncResult<()> {
        (**self).navigate(url).await
    }
}
