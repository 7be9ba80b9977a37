/// ListResponse - Summary of one completed list command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListResponse {
    /// Records received across all pages
    pub record_count: usize,
    /// Requests issued, including a trailing empty page
    pub pages: usize,
}
