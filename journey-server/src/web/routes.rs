//! HTTP route handlers.

use askama::Template;
use axum::{
    Form, Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, Uri, header},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use chrono::Local;
use tower_http::services::ServeDir;

use crate::catalog::guide::{ACCOMMODATIONS, DESTINATIONS, DISHES};
use crate::contact::ContactMessage;
use crate::expenses::{ExpenseCategory, ExpenseId, ExpenseLedger, NewExpense};
use crate::listings::{
    AccommodationFilter, DishFilter, MAX_PRICE, MIN_PRICE, PRICE_STEP, category_options,
    kind_options, location_options, region_options,
};
use crate::planner::{TripQuery, build_map_view, resolve, resolve_query};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Number of destinations featured on the home page.
const FEATURED_COUNT: usize = 3;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/destinations", get(destinations_page))
        .route("/accommodations", get(accommodations_page))
        .route("/food", get(food_page))
        .route("/expenses", get(expenses_page).post(add_expense))
        .route("/expenses/:id/delete", post(delete_expense))
        .route("/contact", get(contact_page).post(submit_contact))
        .route("/trip-planner", get(trip_planner))
        .route("/api/places", get(list_places))
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found)
        .with_state(state)
}

/// Render a template to an HTML response.
fn render(template: &impl Template) -> Result<Html<String>, AppError> {
    template.render().map(Html).map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Home page.
async fn index_page() -> Result<Html<String>, AppError> {
    let featured = DESTINATIONS
        .iter()
        .take(FEATURED_COUNT)
        .map(DestinationView::from_destination)
        .collect();

    render(&IndexTemplate { featured })
}

/// Destination guide.
async fn destinations_page() -> Result<Html<String>, AppError> {
    let destinations = DESTINATIONS
        .iter()
        .map(DestinationView::from_destination)
        .collect();

    render(&DestinationsTemplate { destinations })
}

/// Accommodation search.
async fn accommodations_page(
    Query(params): Query<AccommodationParams>,
) -> Result<Html<String>, AppError> {
    let filter = AccommodationFilter::from_params(
        params.location.as_deref(),
        params.kind.as_deref(),
        params.max_price.as_deref(),
    );

    let listings = filter
        .apply(ACCOMMODATIONS)
        .into_iter()
        .map(AccommodationView::from_accommodation)
        .collect();

    render(&AccommodationsTemplate {
        listings,
        locations: SelectOption::list(
            location_options(ACCOMMODATIONS),
            filter.location.as_str(),
            capitalize,
        ),
        kinds: SelectOption::list(
            kind_options(ACCOMMODATIONS),
            filter.kind.as_str(),
            capitalize,
        ),
        max_price: filter.max_price,
        min_price: MIN_PRICE,
        slider_max: MAX_PRICE,
        price_step: PRICE_STEP,
    })
}

/// Food guide.
async fn food_page(Query(params): Query<FoodParams>) -> Result<Html<String>, AppError> {
    let filter = DishFilter::from_params(
        params.q.as_deref(),
        params.category.as_deref(),
        params.region.as_deref(),
    );

    let dishes = filter
        .apply(DISHES)
        .into_iter()
        .map(DishView::from_dish)
        .collect();

    render(&FoodTemplate {
        dishes,
        categories: SelectOption::list(
            category_options(DISHES),
            filter.category.as_str(),
            all_label("All Categories"),
        ),
        regions: SelectOption::list(
            region_options(DISHES),
            filter.region.as_str(),
            all_label("All Regions"),
        ),
        search: filter.search,
    })
}

/// Build the expense tracker page, keeping the submitted form values when
/// re-rendering after an error.
fn expense_tracker(
    ledger: &ExpenseLedger,
    form: Option<&ExpenseForm>,
    error: Option<String>,
) -> ExpensesTemplate {
    let default_category = ExpenseCategory::default();
    let category = form.map_or(default_category.label(), |f| f.category.as_str());
    let today = Local::now().date_naive().format("%Y-%m-%d").to_string();

    ExpensesTemplate {
        expenses: ledger.iter().map(ExpenseView::from_expense).collect(),
        total: ledger.total().to_string(),
        totals: ledger
            .by_category()
            .iter()
            .filter(|t| !t.amount.is_zero())
            .map(CategoryTotalView::from_total)
            .collect(),
        categories: SelectOption::list(
            ExpenseCategory::ALL.iter().map(|c| c.label()),
            category,
            str::to_string,
        ),
        form_amount: form.map(|f| f.amount.clone()).unwrap_or_default(),
        form_date: form.map_or(today, |f| f.date.clone()),
        form_description: form.map(|f| f.description.clone()).unwrap_or_default(),
        error,
    }
}

/// Expense tracker.
async fn expenses_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let ledger = state.expenses.read().await;
    render(&expense_tracker(&ledger, None, None))
}

/// Record a new expense.
async fn add_expense(
    State(state): State<AppState>,
    Form(form): Form<ExpenseForm>,
) -> Result<Response, AppError> {
    let mut ledger = state.expenses.write().await;
    let added = NewExpense::parse(&form.category, &form.amount, &form.date, &form.description)
        .and_then(|expense| ledger.add(expense));

    match added {
        Ok(id) => {
            tracing::info!(%id, "expense recorded");
            Ok(Redirect::to("/expenses").into_response())
        }
        Err(e) => {
            tracing::debug!(error = %e, "rejected expense form");
            let page = render(&expense_tracker(&ledger, Some(&form), Some(e.to_string())))?;
            Ok((StatusCode::BAD_REQUEST, page).into_response())
        }
    }
}

/// Delete an expense.
async fn delete_expense(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Redirect, AppError> {
    let id = ExpenseId(id);
    let removed = state.expenses.write().await.remove(id);

    match removed {
        Some(_) => {
            tracing::info!(%id, "expense deleted");
            Ok(Redirect::to("/expenses"))
        }
        None => Err(AppError::NotFound {
            message: format!("No expense with id {}", id),
        }),
    }
}

/// Build the contact page around the given field values.
fn contact_form(enabled: bool, notice: Option<Notice>, msg: &ContactMessage) -> ContactTemplate {
    ContactTemplate {
        enabled,
        notice,
        name: msg.name.clone(),
        email: msg.email.clone(),
        phone: msg.phone.clone(),
        message: msg.message.clone(),
    }
}

/// Contact page.
async fn contact_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render(&contact_form(
        state.contact.is_some(),
        None,
        &ContactMessage::default(),
    ))
}

/// Forward a contact message to the form service.
async fn submit_contact(
    State(state): State<AppState>,
    Form(msg): Form<ContactMessage>,
) -> Result<Response, AppError> {
    let Some(client) = state.contact.as_ref() else {
        let notice = Notice {
            success: false,
            text: "The contact form is currently unavailable.".to_string(),
        };
        let page = render(&contact_form(false, Some(notice), &msg))?;
        return Ok((StatusCode::SERVICE_UNAVAILABLE, page).into_response());
    };

    match client.submit(&msg).await {
        Ok(()) => {
            tracing::info!("contact message sent");
            let notice = Notice {
                success: true,
                text: "Message sent successfully!".to_string(),
            };
            let page = render(&contact_form(true, Some(notice), &ContactMessage::default()))?;
            Ok(page.into_response())
        }
        Err(e) if e.is_user_error() => {
            let notice = Notice {
                success: false,
                text: capitalize(&e.to_string()),
            };
            let page = render(&contact_form(true, Some(notice), &msg))?;
            Ok((StatusCode::BAD_REQUEST, page).into_response())
        }
        Err(e) => {
            tracing::error!(error = %e, "contact submission failed");
            let notice = Notice {
                success: false,
                text: "Failed to send message. Please try again.".to_string(),
            };
            let page = render(&contact_form(true, Some(notice), &msg))?;
            Ok((StatusCode::BAD_GATEWAY, page).into_response())
        }
    }
}

/// Trip planner.
///
/// Browsers get the planner page, with results once source, destination and
/// date are all filled in. Other clients get the resolved trip as JSON.
async fn trip_planner(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<TripParams>,
) -> Result<Response, AppError> {
    let travel_date = params.travel_date();

    if !accepts_html(&headers) {
        let travel_date = travel_date.map_err(|message| AppError::BadRequest { message })?;
        let trip = resolve(params.source(), params.destination(), &state.places);
        let map = build_map_view(&trip, &state.map);
        return Ok(Json(TripResponse {
            travel_date,
            trip,
            map,
        })
        .into_response());
    }

    let (trip, error) = match travel_date {
        Ok(Some(date)) if !params.source().is_empty() && !params.destination().is_empty() => {
            let query = TripQuery::new(params.source(), params.destination(), date);
            let result = resolve_query(&query, &state.places);
            let map = build_map_view(&result, &state.map);
            let view = TripView::from_trip(
                &result,
                &map,
                &query.source_name,
                &query.destination_name,
                date,
            );
            (Some(view), None)
        }
        Ok(_) => (None, None),
        Err(message) => (None, Some(message)),
    };

    let names = state.places.names();
    let status = if error.is_some() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::OK
    };

    let template = TripPlannerTemplate {
        sources: SelectOption::list(names.iter().copied(), params.source(), str::to_string),
        destinations: SelectOption::list(
            names.iter().copied(),
            params.destination(),
            str::to_string,
        ),
        date: params.date.clone().unwrap_or_default(),
        error,
        trip,
    };

    Ok((status, render(&template)?).into_response())
}

/// List the place catalog.
async fn list_places(State(state): State<AppState>) -> Response {
    let places = state.places.iter().collect();
    Json(PlacesResponse { places }).into_response()
}

/// Fallback for unknown paths.
async fn not_found(headers: HeaderMap, uri: Uri) -> Result<Response, AppError> {
    let message = format!("No page at {}", uri.path());

    if !accepts_html(&headers) {
        return Err(AppError::NotFound { message });
    }

    tracing::warn!(status = %StatusCode::NOT_FOUND, "{message}");
    let page = render(&ErrorTemplate {
        title: "Page Not Found".to_string(),
        message,
    })?;
    Ok((StatusCode::NOT_FOUND, page).into_response())
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message.clone()),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.clone()),
        };

        if status.is_server_error() {
            tracing::error!(%status, "{message}");
        } else {
            tracing::warn!(%status, "{message}");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
