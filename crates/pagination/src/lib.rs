use anyhow::ensure;
use anyhow::Result;
use std::future::Future;

/// One page of an offset-paginated query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page<T> {
    /// The items in this page, in source order.
    pub items: Vec<T>,
    /// The offset at which the query for the next page should start.
    pub next_offset: u32,
}

/// Drains an offset-paginated source into a single `Vec`.
///
/// Every query requests `page_size` items. The first query starts at offset
/// zero and each subsequent query starts at the `next_offset` returned with
/// the previous page. A page with fewer than `page_size` items signals the
/// end of the data; the source is not queried again after it. The first
/// error returned by the source aborts the drain, dropping any items
/// collected so far.
pub async fn collect_pages<T, F, Fut>(mut fetch_page: F, page_size: u32) -> Result<Vec<T>>
where
    F: FnMut(u32, u32) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    ensure!(page_size > 0, "Page size must be positive");

    let mut items = Vec::new();
    let mut offset = 0;

    loop {
        let page = fetch_page(offset, page_size).await?;
        let full_page = page.items.len() >= page_size as usize;

        tracing::trace!(offset, items = page.items.len(), "Fetched page");

        items.extend(page.items);

        if !full_page {
            return Ok(items);
        }

        offset = page.next_offset;
    }
}
