// src/progress.rs
/// Lightweight progress reporting for the page loop.
/// Frontends implement this to surface status to users; it carries no data.
pub trait Progress {
    /// Called once before the first page is requested.
    fn begin(&mut self, _user_id: &str) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called after each successfully fetched page with its row count (0 on the last one).
    fn page_done(&mut self, _page: u32, _rows: usize) {}

    /// Called at the end of collection, with pages that contributed rows.
    fn finish(&mut self, _pages: u32, _records: usize) {}
}

