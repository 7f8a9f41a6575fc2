//! Streamed paginated listings
//!
//! A listing is a producer/consumer pair. The producer fetches pages one at a
//! time and pushes each page's resources as a batch; when it is done it
//! closes the batch stream and then reports a terminal [`ApiResponse`] on a
//! separate channel. The consumer may stop early; the producer notices the
//! stop between pages and halts without issuing further requests.
//!
//! Two signals complete a listing: the batch stream ending and the status
//! arriving. Batches emitted before a failure stay valid.

use cfkit_domain::{ApiResponse, ApiResult};
use tokio::sync::{mpsc, oneshot};
use tokio_util::sync::CancellationToken;

/// Default number of buffered batches between producer and consumer.
pub const DEFAULT_LISTING_CAPACITY: usize = 4;

/// Consumer half of a listing
#[derive(Debug)]
pub struct Listing<T> {
    batches: mpsc::Receiver<Vec<T>>,
    status: oneshot::Receiver<ApiResponse>,
    cancel: CancellationToken,
}

/// Producer half of a listing
#[derive(Debug)]
pub struct ListingProducer<T> {
    batches: mpsc::Sender<Vec<T>>,
    status: oneshot::Sender<ApiResponse>,
    cancel: CancellationToken,
}

/// Create a connected producer/consumer pair.
pub fn channel<T>(capacity: usize) -> (ListingProducer<T>, Listing<T>) {
    let (batch_tx, batch_rx) = mpsc::channel(capacity.max(1));
    let (status_tx, status_rx) = oneshot::channel();
    let cancel = CancellationToken::new();

    (
        ListingProducer { batches: batch_tx, status: status_tx, cancel: cancel.clone() },
        Listing { batches: batch_rx, status: status_rx, cancel },
    )
}

impl<T> Listing<T> {
    /// A listing that yields `batches` then finishes with `status`.
    pub fn from_batches(batches: Vec<Vec<T>>, status: ApiResponse) -> Self {
        let (producer, listing) = channel(batches.len());
        for batch in batches {
            // Capacity covers every batch, so this never waits.
            if producer.batches.try_send(batch).is_err() {
                break;
            }
        }
        producer.finish(status);
        listing
    }

    /// Next batch, or `None` once the producer closed the stream.
    pub async fn next_batch(&mut self) -> Option<Vec<T>> {
        self.batches.recv().await
    }

    /// Ask the producer to stop after the page it is currently fetching.
    pub fn stop(&self) {
        self.cancel.cancel();
    }

    pub fn is_stopped(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Wait for the terminal status, discarding any batches not yet read.
    pub async fn status(self) -> ApiResponse {
        let Self { batches, status, cancel: _ } = self;
        drop(batches);
        status
            .await
            .unwrap_or_else(|_| ApiResponse::with_message("Listing ended without reporting a status"))
    }

    /// Drain every batch in order, then resolve the terminal status.
    pub async fn collect(mut self) -> ApiResult<Vec<T>> {
        let mut items = Vec::new();
        while let Some(batch) = self.next_batch().await {
            items.extend(batch);
        }

        match self.status().await {
            ApiResponse::Success => Ok(items),
            failure => Err(failure),
        }
    }
}

impl<T> ListingProducer<T> {
    /// True once the consumer stopped or went away.
    pub fn is_stopped(&self) -> bool {
        self.cancel.is_cancelled() || self.batches.is_closed()
    }

    /// Push a batch to the consumer; `false` means the consumer is gone or
    /// asked to stop and no further pages should be fetched.
    pub async fn emit(&self, batch: Vec<T>) -> bool {
        tokio::select! {
            biased;
            () = self.cancel.cancelled() => false,
            sent = self.batches.send(batch) => sent.is_ok(),
        }
    }

    /// Close the batch stream, then publish the terminal status.
    pub fn finish(self, status: ApiResponse) {
        let Self { batches, status: status_tx, cancel: _ } = self;
        drop(batches);
        // The consumer may have dropped the listing entirely.
        let _ = status_tx.send(status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn collects_batches_in_order() {
        let listing = Listing::from_batches(vec![vec![1, 2], vec![3]], ApiResponse::success());
        assert_eq!(listing.collect().await, Ok(vec![1, 2, 3]));
    }

    #[tokio::test]
    async fn failure_status_is_surfaced_after_batches() {
        let failure = ApiResponse::new("boom", "10001", 500);
        let mut listing = Listing::from_batches(vec![vec!["a"]], failure.clone());

        assert_eq!(listing.next_batch().await, Some(vec!["a"]));
        assert_eq!(listing.next_batch().await, None);
        assert_eq!(listing.status().await, failure);
    }

    #[tokio::test]
    async fn empty_listing_is_successful() {
        let listing: Listing<u8> = Listing::from_batches(Vec::new(), ApiResponse::success());
        assert_eq!(listing.collect().await, Ok(Vec::new()));
    }

    #[tokio::test]
    async fn stop_is_visible_to_producer() {
        let (producer, listing) = channel::<u8>(1);
        assert!(!producer.is_stopped());

        listing.stop();

        assert!(producer.is_stopped());
        assert!(!producer.emit(vec![1]).await);
    }

    #[tokio::test]
    async fn dropped_consumer_stops_producer() {
        let (producer, listing) = channel::<u8>(1);
        drop(listing);

        assert!(producer.is_stopped());
        assert!(!producer.emit(vec![1]).await);
        producer.finish(ApiResponse::success());
    }

    #[tokio::test]
    async fn producer_dropped_without_status_reports_failure() {
        let (producer, listing) = channel::<u8>(1);
        drop(producer);

        let status = listing.status().await;
        assert!(status.is_not_successful());
    }
}
