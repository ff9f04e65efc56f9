use crate::domain::account::Account;
use crate::domain::ports::Navigator;
use tokio::sync::watch;
use tracing::info;

/// Publishes the navigation signal on a `watch` channel.
///
/// The receiver sees the account the customer was sent in with, or `None`
/// while checkout has not completed.
pub struct WatchNavigator {
    tx: watch::Sender<Option<Account>>,
}

impl WatchNavigator {
    pub fn new() -> (Self, watch::Receiver<Option<Account>>) {
        let (tx, rx) = watch::channel(None);
        (Self { tx }, rx)
    }
}

impl Navigator for WatchNavigator {
    fn navigate_to_authenticated_area(&self, account: &Account) {
        info!(account_id = %account.id, "Entering authenticated area");
        self.tx.send_replace(Some(account.clone()));
    }
}
