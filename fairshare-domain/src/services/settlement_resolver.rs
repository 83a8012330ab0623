use crate::{
    error::ValidationError,
    model::{Balances, Money, ParticipantId, Transfer},
};
use std::{cmp::Reverse, collections::BinaryHeap};

/// Settlement resolution service.
///
/// Policy: the largest remaining debtor pays the largest remaining creditor,
/// ties going to the lower participant id. This is a greedy approximation of
/// the minimum-transaction settlement; each step zeroes at least one
/// participant, so a group with `n` nonzero balances settles in at most
/// `n - 1` transfers.
pub struct SettlementResolver;

// Max-heap entry: larger magnitude first, then lower id.
type Entry<'a> = (Money, Reverse<&'a ParticipantId>);

impl SettlementResolver {
    /// Produce transfers that bring every balance to zero.
    ///
    /// The order of the returned list is the order in which the transfers
    /// were generated. It depends only on the balance values and ids, never on
    /// map iteration order.
    pub fn resolve(&self, balances: &Balances) -> Result<Vec<Transfer>, ValidationError> {
        let wide_total: i128 = balances
            .values()
            .map(|balance| i128::from(balance.amount()))
            .sum();
        if wide_total != 0 {
            let total = Money::from_i64(wide_total.clamp(i64::MIN.into(), i64::MAX.into()) as i64);
            tracing::warn!(
                participant_count = balances.len(),
                total = %total,
                "Settlement rejected due to imbalanced input"
            );
            return Err(ValidationError::ImbalancedTotal(total));
        }

        let mut debtors: BinaryHeap<Entry<'_>> = BinaryHeap::new();
        let mut creditors: BinaryHeap<Entry<'_>> = BinaryHeap::new();
        for (id, balance) in balances {
            if balance.is_negative() {
                let debt = balance
                    .checked_abs()
                    .ok_or_else(|| ValidationError::BalanceOutOfRange(id.clone()))?;
                debtors.push((debt, Reverse(id)));
            } else if balance.is_positive() {
                creditors.push((*balance, Reverse(id)));
            }
        }

        let nonzero = debtors.len() + creditors.len();
        let mut transfers = Vec::with_capacity(nonzero.saturating_sub(1));

        while let (Some((debt, Reverse(debtor))), Some((credit, Reverse(creditor)))) =
            (debtors.pop(), creditors.pop())
        {
            let amount = debt.min(credit);
            transfers.push(Transfer {
                from: debtor.clone(),
                to: creditor.clone(),
                amount,
            });

            let debt_left = debt - amount;
            if !debt_left.is_zero() {
                debtors.push((debt_left, Reverse(debtor)));
            }
            let credit_left = credit - amount;
            if !credit_left.is_zero() {
                creditors.push((credit_left, Reverse(creditor)));
            }
        }

        // A zero total guarantees both sides drain together.
        debug_assert!(debtors.is_empty() && creditors.is_empty());
        tracing::debug!(
            nonzero_balances = nonzero,
            transfer_count = transfers.len(),
            "Resolved settlement transfers"
        );

        Ok(transfers)
    }
}
