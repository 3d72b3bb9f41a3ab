// Application state for HTTP handlers
use crate::application::binder::ReactiveBinder;
use crate::domain::record::Table;
use crate::presentation::layout::PageLayout;

/// Everything a handler needs, shared behind an Arc. The table is loaded
/// once at startup and read-only afterwards, so no locking is involved.
pub struct AppState {
    pub table: Table,
    pub layout: PageLayout,
    pub binder: ReactiveBinder,
}
