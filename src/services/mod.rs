pub mod db_init;

pub mod user_service;
pub mod account_service;
pub mod market_shares_service;
pub mod order_service;
pub mod daily_report_service;
