use crate::{
    error::{ServiceError, ServiceResult},
    models::Account,
    repositories::{account_repository, user_repository},
    AppState,
};

/// Opens an account for an existing user. Holdings start empty.
pub async fn open_account(state: &AppState, user_id: i64) -> ServiceResult<Account> {
    if user_repository::find_by_id(&state.db, user_id).await?.is_none() {
        return Err(ServiceError::NotFound(format!("User with id {user_id} not found.")));
    }

    let id = account_repository::insert(&state.db, user_id).await?;
    tracing::info!(user_id, account_id = id, "account opened");

    Ok(Account {
        id,
        user_id,
        shares: vec![],
    })
}

pub async fn list_accounts(state: &AppState) -> ServiceResult<Vec<Account>> {
    Ok(account_repository::find_all(&state.db).await?)
}

pub async fn get_account(state: &AppState, id: i64) -> ServiceResult<Account> {
    account_repository::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("Account with id {id} not found.")))
}

pub async fn accounts_for_user(state: &AppState, user_id: i64) -> ServiceResult<Vec<Account>> {
    Ok(account_repository::find_by_user(&state.db, user_id).await?)
}

pub async fn delete_account(state: &AppState, id: i64) -> ServiceResult<()> {
    if !account_repository::delete(&state.db, id).await? {
        return Err(ServiceError::NotFound(format!("Account with id {id} not found.")));
    }

    tracing::info!(account_id = id, "account deleted");
    Ok(())
}
