// Turns a change subscription into debounced refreshes.
//
// The first notification opens a window; everything arriving before the
// window closes is folded into the same refresh. The loop ends when the feed
// closes, the owner is dropped, or a refresh reports that its mount token is
// no longer current.

use crate::shared::infrastructure::change_feed::Subscription;
use async_trait::async_trait;
use std::sync::Weak;
use std::time::Duration;
use tokio::time::{Instant, sleep_until};
use tracing::{debug, trace};

#[async_trait]
pub trait Refresh: Send + Sync {
    /// Re-reads everything for the mount identified by `token`. Returns
    /// `false` once that mount is gone.
    async fn refresh(&self, token: u64) -> bool;
}

pub async fn run<R>(owner: Weak<R>, token: u64, mut subscription: Subscription, window: Duration)
where
    R: Refresh + 'static,
{
    while let Some(first) = subscription.next().await {
        trace!(token, kind = ?first.kind, "change received");
        let deadline = Instant::now() + window;
        let mut coalesced = 0usize;
        loop {
            tokio::select! {
                _ = sleep_until(deadline) => break,
                next = subscription.next() => match next {
                    Some(_) => coalesced += 1,
                    None => break,
                },
            }
        }

        let Some(owner) = owner.upgrade() else {
            debug!(token, "refresh owner dropped");
            return;
        };
        debug!(token, coalesced, "refreshing after change");
        if !owner.refresh(token).await {
            debug!(token, "mount superseded, stopping refresh loop");
            return;
        }
    }
    debug!(token, "change feed closed");
}
