use crate::catalog::domain::QueryCriteria;
use crate::shared::Result;
use std::iter::FusedIterator;
use std::marker::PhantomData;

/// One page of records and the offset it was requested at
#[derive(Debug, Clone, PartialEq)]
pub struct Page<R> {
    pub offset: usize,
    pub records: Vec<R>,
}

impl<R> Page<R> {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Live offset and cumulative record count of a paginated walk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginationCursor {
    pub offset: usize,
    pub record_count: usize,
}

/// Walks a paginated endpoint until it is exhausted or `record_limit` is hit
///
/// Each `next` issues exactly one request through `fetch_page`, which is
/// handed the full query string for the current offset. The walk stops after
/// an empty page, after a short page (`len < limit`), once the cumulative
/// count reaches `record_limit`, or after the first error. It is not
/// restartable.
///
/// ```
/// use wsusscn2_cli::catalog::domain::QueryCriteria;
/// use wsusscn2_cli::catalog::services::Paginator;
///
/// let criteria = QueryCriteria::builder().limit(2).build();
/// let mut remaining = vec![vec![1, 2], vec![3]];
/// let mut pages = Paginator::new(&criteria, |_params: &[(String, String)]| {
///     Ok(remaining.remove(0))
/// });
///
/// let offsets: Vec<usize> = pages.by_ref().map(|p| p.unwrap().offset).collect();
/// assert_eq!(offsets, vec![0, 2]);
/// assert_eq!(pages.cursor().record_count, 3);
/// ```
pub struct Paginator<'c, R, F> {
    criteria: &'c QueryCriteria,
    fetch_page: F,
    cursor: PaginationCursor,
    done: bool,
    _record: PhantomData<fn() -> R>,
}

impl<'c, R, F> Paginator<'c, R, F>
where
    F: FnMut(&[(String, String)]) -> Result<Vec<R>>,
{
    pub fn new(criteria: &'c QueryCriteria, fetch_page: F) -> Self {
        Self {
            criteria,
            fetch_page,
            cursor: PaginationCursor {
                offset: criteria.offset(),
                record_count: 0,
            },
            done: false,
            _record: PhantomData,
        }
    }

    pub fn cursor(&self) -> PaginationCursor {
        self.cursor
    }
}

impl<R, F> Iterator for Paginator<'_, R, F>
where
    F: FnMut(&[(String, String)]) -> Result<Vec<R>>,
{
    type Item = Result<Page<R>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.cursor.record_count >= self.criteria.record_limit() {
            return None;
        }

        let params = self.criteria.query_params(self.cursor.offset);
        let records = match (self.fetch_page)(&params) {
            Ok(records) => records,
            Err(e) => {
                self.done = true;
                return Some(Err(e));
            }
        };

        let fetched = records.len();
        let page = Page {
            offset: self.cursor.offset,
            records,
        };

        if fetched == 0 {
            log::info!("No more records returned");
            self.done = true;
        } else if fetched < self.criteria.limit() {
            log::info!("Last page of records reached");
            self.done = true;
        }

        self.cursor.offset += fetched;
        self.cursor.record_count += fetched;

        Some(Ok(page))
    }
}

impl<R, F> FusedIterator for Paginator<'_, R, F> where
    F: FnMut(&[(String, String)]) -> Result<Vec<R>>
{
}
