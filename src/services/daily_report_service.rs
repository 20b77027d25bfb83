use crate::{
    error::{ServiceError, ServiceResult},
    models::{DailyReport, NewDailyReport, NewOrder},
    repositories::daily_report_repository,
    AppState,
};

/// Appends the report derived from `order` to the reporting store. The order is not modified.
pub async fn add_new_report(state: &AppState, order: &NewOrder) -> ServiceResult<i64> {
    let report = NewDailyReport::from_order(order);

    let id = daily_report_repository::insert(&state.reports_db, &report)
        .await
        .map_err(|e| ServiceError::Operational(format!("Failed to add new report: {e}")))?;

    tracing::info!(report_id = id, ticker = %report.ticker, liquidity = report.liquidity, "daily report appended");
    Ok(id)
}

pub async fn get_all_reports(state: &AppState) -> ServiceResult<Vec<DailyReport>> {
    Ok(daily_report_repository::find_all(&state.reports_db).await?)
}

pub async fn get_report_by_id(state: &AppState, id: i64) -> ServiceResult<DailyReport> {
    daily_report_repository::find_by_id(&state.reports_db, id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("Daily report with id {id} not found.")))
}

pub async fn get_reports_by_ticker(state: &AppState, ticker: &str) -> ServiceResult<Vec<DailyReport>> {
    Ok(daily_report_repository::find_by_ticker(&state.reports_db, ticker).await?)
}

pub async fn update_report(state: &AppState, id: i64, report: &NewDailyReport) -> ServiceResult<DailyReport> {
    if report.ticker.trim().is_empty() {
        return Err(ServiceError::Validation("Missing ticker.".into()));
    }

    if !daily_report_repository::update(&state.reports_db, id, report).await? {
        return Err(ServiceError::NotFound(format!("Report with id {id} not found")));
    }

    Ok(DailyReport {
        id,
        ticker: report.ticker.clone(),
        created_at: report.created_at,
        quantity: report.quantity,
        liquidity: report.liquidity,
    })
}

pub async fn delete_report(state: &AppState, id: i64) -> ServiceResult<()> {
    if !daily_report_repository::delete(&state.reports_db, id).await? {
        return Err(ServiceError::NotFound(format!("Report with id {id} not found")));
    }
    Ok(())
}
