use crate::{
    error::{constraint_or_operational, ServiceError, ServiceResult},
    models::{User, UserInput},
    repositories::{account_repository, user_repository},
    AppState,
};

fn validate(input: &UserInput) -> ServiceResult<()> {
    let missing: Vec<&str> = [
        ("document", &input.document),
        ("first_name", &input.first_name),
        ("last_name", &input.last_name),
    ]
    .into_iter()
    .filter(|(_, v)| v.trim().is_empty())
    .map(|(k, _)| k)
    .collect();

    if !missing.is_empty() {
        return Err(ServiceError::Validation(format!(
            "Missing required fields: {}.",
            missing.join(", ")
        )));
    }
    Ok(())
}

/// Registers a user and opens their first account. Returns the user and the account id.
pub async fn create_user(state: &AppState, input: &UserInput) -> ServiceResult<(User, i64)> {
    validate(input)?;

    // user and first account land together or not at all
    let mut tx = state.db.begin().await?;
    let id = user_repository::insert(&mut *tx, input).await?;
    let account_id = account_repository::insert(&mut *tx, id).await?;
    tx.commit().await?;

    tracing::info!(user_id = id, account_id, "user registered");

    let user = User {
        id,
        document: input.document.clone(),
        first_name: input.first_name.clone(),
        last_name: input.last_name.clone(),
    };
    Ok((user, account_id))
}

pub async fn list_users(state: &AppState) -> ServiceResult<Vec<User>> {
    Ok(user_repository::find_all(&state.db).await?)
}

pub async fn get_user(state: &AppState, id: i64) -> ServiceResult<User> {
    user_repository::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("User with id {id} not found.")))
}

pub async fn update_user(state: &AppState, id: i64, input: &UserInput) -> ServiceResult<User> {
    validate(input)?;

    if !user_repository::update(&state.db, id, input).await? {
        return Err(ServiceError::NotFound(format!("User with id {id} not found.")));
    }

    Ok(User {
        id,
        document: input.document.clone(),
        first_name: input.first_name.clone(),
        last_name: input.last_name.clone(),
    })
}

pub async fn delete_user(state: &AppState, id: i64) -> ServiceResult<()> {
    let deleted = user_repository::delete(&state.db, id).await.map_err(|e| {
        constraint_or_operational(e, format!("User with id {id} still owns accounts or orders."))
    })?;

    if !deleted {
        return Err(ServiceError::NotFound(format!("User with id {id} not found.")));
    }

    tracing::info!(user_id = id, "user deleted");
    Ok(())
}
