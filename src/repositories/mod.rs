//! Single-statement reads and writes, one module per table. No joins across
//! tables happen here; callers combine results.

pub mod user_repository;
pub mod account_repository;
pub mod market_shares_repository;
pub mod order_repository;
pub mod daily_report_repository;
