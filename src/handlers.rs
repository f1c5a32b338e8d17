use crate::calculators::{self, Calculator};
use crate::errors::AppError;
use crate::models::{chart_or_default, ChartKind, ChartQuery, HealthResponse, PageView, SubmitRequest};
use crate::page::CalculatorPage;
use crate::state::AppState;
use crate::ui::{render_calculator, render_home};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
    Form, Json,
};
use std::collections::HashMap;
use tracing::{info, warn};

pub async fn index() -> Html<String> {
    Html(render_home())
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        upstream: state.config.api_base.clone(),
    })
}

pub async fn calculator_page(
    Path(slug): Path<String>,
    Query(query): Query<ChartQuery>,
) -> Result<Html<String>, AppError> {
    let calc = lookup(&slug)?;
    let mut page = CalculatorPage::new(calc);
    page.set_chart(query.kind());
    Ok(Html(render_calculator(&page)))
}

/// Plain form post for browsers without the page script.
pub async fn submit_form(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Form(fields): Form<HashMap<String, String>>,
) -> Result<(StatusCode, Html<String>), AppError> {
    let calc = lookup(&slug)?;
    let chart = chart_or_default(fields.get("chart").map(String::as_str));
    let mut page = page_from_fields(calc, &fields, chart);

    let status = match run_submit(&state, &mut page).await {
        Ok(()) => StatusCode::OK,
        Err(err) => err.status,
    };
    Ok((status, Html(render_calculator(&page))))
}

pub async fn submit(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(request): Json<SubmitRequest>,
) -> Result<Json<PageView>, AppError> {
    let calc = lookup(&slug)?;
    let chart = chart_or_default(request.chart.as_deref());
    let mut page = page_from_fields(calc, &request.fields, chart);

    run_submit(&state, &mut page).await?;
    Ok(Json(page.view()))
}

async fn run_submit(state: &AppState, page: &mut CalculatorPage) -> Result<(), AppError> {
    let slug = page.calculator().slug;
    match page.submit(&state.client).await {
        Ok(()) => {
            info!(calculator = slug, "calculation succeeded");
            Ok(())
        }
        Err(err) => {
            let err = AppError::from(err);
            warn!(calculator = slug, status = err.status.as_u16(), "calculation failed: {}", err.message);
            Err(err)
        }
    }
}

fn page_from_fields(
    calc: &'static Calculator,
    fields: &HashMap<String, String>,
    chart: ChartKind,
) -> CalculatorPage {
    let mut page = CalculatorPage::new(calc);
    for (name, value) in fields {
        page.update_field(name, value.as_str());
    }
    page.set_chart(chart);
    page
}

fn lookup(slug: &str) -> Result<&'static Calculator, AppError> {
    calculators::find(slug).ok_or_else(|| AppError::not_found("unknown calculator"))
}
