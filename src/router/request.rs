//! Caller-authored swap requests.
//!
//! One struct per entry point.  Requests are inert data — every field is
//! validated by the executing engine, and symbolic placeholders
//! ([`Recipient`], [`InputAmount`]) resolve at the point of first use
//! during execution, never at construction.

use crate::domain::{Amount, AssetId, InputAmount, Recipient, Selector, SqrtPrice};
use crate::path::HopPath;

/// Request for a single-hop exact-input swap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactInputSingleRequest {
    /// Asset supplied by the payer.
    pub asset_in: AssetId,
    /// Asset delivered to the recipient.
    pub asset_out: AssetId,
    /// Selector of the pool servicing the hop.
    pub selector: Selector,
    /// Where to deliver the output.
    pub recipient: Recipient,
    /// Input side: an exact amount, or the router's entire balance.
    pub amount_in: InputAmount,
    /// Minimum acceptable output; below it the call fails.
    pub amount_out_minimum: Amount,
    /// Optional bound on price movement; `None` accepts any price.
    pub price_limit: Option<SqrtPrice>,
}

/// Request for a multi-hop exact-input swap.
///
/// The path is authored input-to-output:
/// `asset_in ‖ selector ‖ … ‖ asset_out`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactInputRequest {
    /// Packed hop path, walked head to tail.
    pub path: HopPath,
    /// Where to deliver the final output.
    pub recipient: Recipient,
    /// Input side: an exact amount, or the router's entire balance.
    pub amount_in: InputAmount,
    /// Minimum acceptable final output; below it the call fails.
    pub amount_out_minimum: Amount,
}

/// Request for a single-hop exact-output swap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactOutputSingleRequest {
    /// Asset supplied by the payer.
    pub asset_in: AssetId,
    /// Asset delivered to the recipient.
    pub asset_out: AssetId,
    /// Selector of the pool servicing the hop.
    pub selector: Selector,
    /// Where to deliver the output.
    pub recipient: Recipient,
    /// Exact output to deliver.
    pub amount_out: Amount,
    /// Maximum acceptable input; above it the call fails.
    pub amount_in_maximum: Amount,
    /// Optional bound on price movement.  `None` accepts any price and
    /// demands exact delivery; `Some` tolerates a partial fill under
    /// adverse pricing.
    pub price_limit: Option<SqrtPrice>,
}

/// Request for a multi-hop exact-output swap.
///
/// The path is authored **output-to-input** —
/// `asset_out ‖ selector ‖ … ‖ asset_in` — because the chain is evaluated
/// in economic reverse: the input of hop *k* is only known after hop
/// *k + 1* settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactOutputRequest {
    /// Packed hop path, authored output-to-input.
    pub path: HopPath,
    /// Where to deliver the final output.
    pub recipient: Recipient,
    /// Exact output to deliver.
    pub amount_out: Amount,
    /// Maximum acceptable total input; above it the call fails.
    pub amount_in_maximum: Amount,
}
