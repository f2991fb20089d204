//! Collection aggregation over server-linked pages.

use std::future::Future;

/// One page of a collection: its items plus the server-supplied link to the
/// next page, if any.
#[derive(Debug)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next: Option<String>,
}

/// Fetch every page of a collection and concatenate the results in server
/// order.
///
/// `fetch` is called with `None` for the first page and with the previous
/// page's `next` link for each page after that. Pages are requested strictly
/// one at a time; the first error aborts aggregation and any items gathered
/// so far are dropped.
pub async fn paginate<T, E, F, Fut>(mut fetch: F) -> Result<Vec<T>, E>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<Page<T>, E>>,
{
    let mut results = Vec::new();
    let mut cursor = None;

    loop {
        let page = fetch(cursor).await?;
        results.extend(page.items);
        match page.next {
            Some(next) => cursor = Some(next),
            None => break,
        }
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_follows_next_links_in_order() {
        let calls = Cell::new(0u32);
        let result: Result<Vec<&str>, String> = tokio_test::block_on(paginate(|cursor| {
            calls.set(calls.get() + 1);
            async move {
                match cursor.as_deref() {
                    None => Ok(Page {
                        items: vec!["a", "b"],
                        next: Some("p2".to_string()),
                    }),
                    Some("p2") => Ok(Page {
                        items: vec!["c"],
                        next: None,
                    }),
                    Some(other) => Err(format!("unexpected cursor: {other}")),
                }
            }
        }));

        assert_eq!(result.unwrap(), vec!["a", "b", "c"]);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_single_page_without_next_link() {
        let result: Result<Vec<u32>, String> = tokio_test::block_on(paginate(|_| async {
            Ok(Page {
                items: vec![1, 2, 3],
                next: None,
            })
        }));

        assert_eq!(result.unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_error_discards_earlier_pages() {
        let calls = Cell::new(0u32);
        let result: Result<Vec<&str>, String> = tokio_test::block_on(paginate(|cursor| {
            calls.set(calls.get() + 1);
            async move {
                match cursor {
                    None => Ok(Page {
                        items: vec!["a"],
                        next: Some("p2".to_string()),
                    }),
                    Some(_) => Err("connection reset".to_string()),
                }
            }
        }));

        assert_eq!(result.unwrap_err(), "connection reset");
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_empty_page_terminates() {
        let calls = Cell::new(0u32);
        let result: Result<Vec<u32>, String> = tokio_test::block_on(paginate(|_| {
            calls.set(calls.get() + 1);
            async {
                Ok(Page {
                    items: vec![],
                    next: None,
                })
            }
        }));

        assert_eq!(result.unwrap(), Vec::<u32>::new());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_ordering_across_many_pages() {
        let result: Result<Vec<u32>, String> = tokio_test::block_on(paginate(|cursor| {
            let page = cursor.map_or(0, |c| c.parse::<u32>().unwrap());
            async move {
                Ok(Page {
                    items: vec![page * 2, page * 2 + 1],
                    next: (page < 4).then(|| (page + 1).to_string()),
                })
            }
        }));

        assert_eq!(result.unwrap(), (0..10).collect::<Vec<u32>>());
    }
}
