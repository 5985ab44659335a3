//! JSON fetch collaborator.
//!
//! Owns URL construction, query-parameter encoding, and HTTP transport for
//! the remote sort path: the widget only sees the [`RemoteSort`] shape.

use std::sync::RwLock;

use chrono::{DateTime, Utc};
use futures::FutureExt;
use futures::future::BoxFuture;
use url::Url;

use crate::column::{Row, SortOrder};
use crate::error::RemoteError;
use crate::remote::RemoteSort;

/// A JSON-over-HTTP row source.
///
/// Sort and paging parameters are appended per request
/// (`_sort`, `_order`, `_start`, `_end`); the date window (`from`, `to`)
/// is shared state so the dashboard can move it between requests.
pub struct JsonSource {
    client: reqwest::Client,
    url: RwLock<Url>,
}

impl JsonSource {
    pub fn new(url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: RwLock::new(url),
        }
    }

    /// Move the date window carried on every subsequent request.
    pub fn set_range(&self, from: DateTime<Utc>, to: DateTime<Utc>) {
        if let Ok(mut url) = self.url.write() {
            set_param(&mut url, "from", &from.to_rfc3339());
            set_param(&mut url, "to", &to.to_rfc3339());
        }
    }

    /// The URL the next request would use, for inspection.
    pub fn url(&self) -> Option<Url> {
        self.url.read().ok().map(|u| u.clone())
    }
}

impl RemoteSort for JsonSource {
    fn fetch(
        &self,
        column: &str,
        order: SortOrder,
        page_start: usize,
        page_count: usize,
    ) -> BoxFuture<'static, Result<Vec<Row>, RemoteError>> {
        let mut url = match self.url.read() {
            Ok(guard) => guard.clone(),
            Err(_) => {
                return futures::future::ready(Err("source url lock poisoned".into())).boxed();
            }
        };
        set_param(&mut url, "_sort", column);
        set_param(&mut url, "_order", order.as_str());
        set_param(&mut url, "_start", &page_start.to_string());
        set_param(&mut url, "_end", &(page_start + page_count).to_string());

        let client = self.client.clone();
        async move {
            let rows = client
                .get(url)
                .send()
                .await?
                .error_for_status()?
                .json::<Vec<Row>>()
                .await?;
            Ok(rows)
        }
        .boxed()
    }
}

/// Set a query parameter, replacing any previous occurrence.
fn set_param(url: &mut Url, key: &str, value: &str) {
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| k != key)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    let mut pairs = url.query_pairs_mut();
    pairs.clear();
    for (k, v) in &kept {
        pairs.append_pair(k, v);
    }
    pairs.append_pair(key, value);
    drop(pairs);
}
