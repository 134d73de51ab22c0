use crate::api::{FetchError, SleeperClient};
use crate::models::Transaction;

/// Number of transactions shown when the caller does not ask for a count
pub const DEFAULT_ACTIVITY_LIMIT: usize = 10;

/// Round whose transactions make up the activity feed
const ACTIVITY_ROUND: u32 = 1;

/// Take the first `limit` transactions and reverse them.
pub fn recent_activity(mut transactions: Vec<Transaction>, limit: usize) -> Vec<Transaction> {
    transactions.truncate(limit);
    transactions.reverse();
    transactions
}

impl SleeperClient {
    pub async fn get_recent_activity(&self, limit: usize) -> Result<Vec<Transaction>, FetchError> {
        let transactions = self.get_transactions(ACTIVITY_ROUND).await?;
        Ok(recent_activity(transactions, limit))
    }
}
