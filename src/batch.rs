//! Fan-out extraction over several recipe URLs.

use crate::error::ExtractError;
use crate::model::Recipe;
use std::thread;

/// Run one full extraction per URL on its own worker thread.
///
/// Each worker writes into a slot only it can reach; the coordinator hands
/// the slots back in input order once every worker has joined. Nothing is
/// published before a worker finishes, and a stuck fetch blocks only its own
/// worker, up to the fetch timeout.
pub fn extract_from_urls(urls: &[String]) -> Vec<Result<Recipe, ExtractError>> {
    let mut results: Vec<Option<Result<Recipe, ExtractError>>> =
        urls.iter().map(|_| None).collect();

    thread::scope(|scope| {
        for (slot, url) in results.iter_mut().zip(urls) {
            scope.spawn(move || {
                *slot = Some(crate::extract_from_url(url));
            });
        }
    });

    results.into_iter().flatten().collect()
}
