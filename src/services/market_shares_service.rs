use crate::{
    error::{constraint_or_operational, ServiceError, ServiceResult},
    models::{CatalogEntry, MarketShare, MarketShareInput},
    repositories::{market_shares_repository, order_repository},
    AppState,
};

fn validate(input: &MarketShareInput) -> ServiceResult<()> {
    if input.ticker.trim().is_empty() {
        return Err(ServiceError::Validation("Missing ticker.".into()));
    }
    if input.name.trim().is_empty() {
        return Err(ServiceError::Validation("Missing name.".into()));
    }
    if !input.current_value.is_finite() || input.current_value < 0.0 {
        return Err(ServiceError::Validation("Enter a valid current value.".into()));
    }
    Ok(())
}

pub async fn create_market_share(state: &AppState, input: &MarketShareInput) -> ServiceResult<MarketShare> {
    validate(input)?;

    let id = market_shares_repository::insert(&state.db, input)
        .await
        .map_err(|e| constraint_or_operational(e, format!("Ticker {} is already listed.", input.ticker)))?;

    tracing::info!(share_id = id, ticker = %input.ticker, "market share listed");

    Ok(MarketShare {
        id,
        ticker: input.ticker.clone(),
        name: input.name.clone(),
        current_value: input.current_value,
    })
}

pub async fn get_market_share(state: &AppState, id: i64) -> ServiceResult<MarketShare> {
    market_shares_repository::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("Market share with id {id} not found.")))
}

/// Exact-match lookup. Absence is not an error here; callers decide what it means.
pub async fn get_market_shares_by_ticker(state: &AppState, ticker: &str) -> ServiceResult<Option<MarketShare>> {
    Ok(market_shares_repository::find_by_ticker(&state.db, ticker).await?)
}

pub async fn update_market_share(state: &AppState, id: i64, input: &MarketShareInput) -> ServiceResult<MarketShare> {
    validate(input)?;

    let updated = market_shares_repository::update(&state.db, id, input)
        .await
        .map_err(|e| constraint_or_operational(e, format!("Ticker {} is already listed.", input.ticker)))?;

    if !updated {
        return Err(ServiceError::NotFound(format!("Market share with id {id} not found.")));
    }

    Ok(MarketShare {
        id,
        ticker: input.ticker.clone(),
        name: input.name.clone(),
        current_value: input.current_value,
    })
}

pub async fn delete_market_share(state: &AppState, id: i64) -> ServiceResult<()> {
    let deleted = market_shares_repository::delete(&state.db, id)
        .await
        .map_err(|e| constraint_or_operational(e, format!("Market share with id {id} still has orders.")))?;

    if !deleted {
        return Err(ServiceError::NotFound(format!("Market share with id {id} not found.")));
    }

    tracing::info!(share_id = id, "market share delisted");
    Ok(())
}

/// Every share with the unit price of its most recent order. Recomputed on each call.
pub async fn catalog(state: &AppState) -> ServiceResult<Vec<CatalogEntry>> {
    let shares = market_shares_repository::find_all(&state.db).await?;

    let mut entries: Vec<CatalogEntry> = Vec::with_capacity(shares.len());
    for share in shares {
        let last = order_repository::find_latest_for_share(&state.db, share.id).await?;
        let last_price = last.and_then(|o| o.unit_price());

        entries.push(CatalogEntry {
            id: share.id,
            name: share.name,
            ticker: share.ticker,
            last_price,
        });
    }

    Ok(entries)
}
