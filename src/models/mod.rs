pub mod user;
pub mod account;
pub mod market_share;
pub mod order;
pub mod daily_report;

pub use user::{User, UserInput};
pub use account::Account;
pub use market_share::{CatalogEntry, MarketShare, MarketShareInput};
pub use order::{CreateOrderRequest, NewOrder, Order, OrderAction, OrderStatus};
pub use daily_report::{DailyReport, NewDailyReport};
