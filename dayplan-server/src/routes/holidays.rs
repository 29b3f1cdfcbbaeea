//! Holiday endpoints

use std::collections::BTreeMap;

use axum::{
    Json, Router,
    extract::State,
    routing::get,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use dayplan_core::holiday::holidays_in_month;

use crate::routes::extract::ApiQuery;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/holidays", get(month_holidays))
}

#[derive(Deserialize)]
pub struct HolidayQuery {
    /// Any date in the month of interest (YYYY-MM-DD)
    pub date: NaiveDate,
}

#[derive(Serialize)]
pub struct HolidayResponse {
    pub holidays: BTreeMap<NaiveDate, String>,
}

/// GET /api/holidays?date=YYYY-MM-DD - Holidays in the month containing `date`
async fn month_holidays(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<HolidayQuery>,
) -> Json<HolidayResponse> {
    Json(HolidayResponse {
        holidays: holidays_in_month(state.holidays.as_ref(), query.date),
    })
}
