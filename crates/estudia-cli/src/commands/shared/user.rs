use anyhow::Context;
use estudia_core::entities::User;
use serde_json::{Value, json};

use crate::context::AppContext;
use crate::state;

/// Resolve the signed-in user, erroring with a hint when there is none.
pub async fn require_current_user(ctx: &AppContext) -> anyhow::Result<User> {
    let user_id =
        state::load_current_user().context("no user is signed in. Run 'est login' first")?;
    ctx.service
        .get_user(&user_id)
        .await?
        .context("the signed-in user does not exist in this database. Run 'est login' again")
}

/// JSON view of a user without credential material.
pub fn user_view(user: &User) -> Value {
    json!({
        "id": user.id,
        "username": user.username,
        "email": user.email,
        "is_active": user.is_active,
        "created_at": user.created_at,
        "full_name": user.full_name,
        "phone": user.phone,
        "company": user.company,
        "position": user.position,
        "experience_years": user.experience_years,
        "target_exam_date": user.target_exam_date,
        "study_hours_daily": user.study_hours_daily,
    })
}
