//! Main application component.

use gloo::console;
use gloo::net::http::Request;
use usage_viewer::{
    DEFAULT_PAGE_SIZE, FIRST_YEAR, FilterCriteria, ViewState, load_from_text, year_options,
};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::{DataTable, FilterBar, Pagination};

/// Where the table data comes from, relative to the page.
const SOURCE_URL: &str = "database.csv";

/// Whether the source file has been fetched yet.
#[derive(Clone, PartialEq, Debug)]
pub enum LoadStatus {
    Loading,
    Ready,
    /// The fetch failed; the message is for the console only.
    Unavailable(String),
}

/// Main application state.
#[derive(Clone, PartialEq)]
pub struct AppState {
    /// Records, active filter and page position.
    pub view: ViewState,
    pub status: LoadStatus,
    /// Filter inputs as typed; applied on Filter.
    pub year_input: String,
    pub month_input: String,
    pub email_input: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            view: ViewState::empty(),
            status: LoadStatus::Loading,
            year_input: String::new(),
            month_input: String::new(),
            email_input: String::new(),
        }
    }
}

/// Build filter criteria from the raw input values. Empty means "All".
pub fn criteria_from_inputs(year: &str, month: &str, email: &str) -> FilterCriteria {
    let mut criteria = FilterCriteria::new().with_email(email);
    if let Ok(year) = year.trim().parse::<i32>() {
        criteria = criteria.with_year(year);
    }
    if !month.is_empty() {
        criteria = criteria.with_month(month);
    }
    criteria
}

async fn fetch_source(url: &str) -> Result<String, String> {
    let response = Request::get(url).send().await.map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("{} {}", response.status(), response.status_text()));
    }
    response.text().await.map_err(|e| e.to_string())
}

fn current_year() -> i32 {
    js_sys::Date::new_0().get_full_year() as i32
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    let state = use_state(AppState::default);

    // Fetch the source once on mount
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let fetched = fetch_source(SOURCE_URL).await;
                let mut new_state = (*state).clone();
                match fetched {
                    Ok(text) => {
                        let records = load_from_text(&text);
                        console::log!(format!("Loaded {} records", records.len()));
                        new_state.view = ViewState::new(records, DEFAULT_PAGE_SIZE);
                        new_state.status = LoadStatus::Ready;
                    }
                    Err(e) => {
                        console::error!(format!("Error fetching {SOURCE_URL}: {e}"));
                        new_state.status = LoadStatus::Unavailable(e);
                    }
                }
                state.set(new_state);
            });
            || ()
        });
    }

    let on_year = {
        let state = state.clone();
        Callback::from(move |value: String| {
            let mut new_state = (*state).clone();
            new_state.year_input = value;
            state.set(new_state);
        })
    };

    let on_month = {
        let state = state.clone();
        Callback::from(move |value: String| {
            let mut new_state = (*state).clone();
            new_state.month_input = value;
            state.set(new_state);
        })
    };

    let on_email = {
        let state = state.clone();
        Callback::from(move |value: String| {
            let mut new_state = (*state).clone();
            new_state.email_input = value;
            state.set(new_state);
        })
    };

    let on_filter = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            let mut new_state = (*state).clone();
            let criteria = criteria_from_inputs(
                &new_state.year_input,
                &new_state.month_input,
                &new_state.email_input,
            );
            new_state.view.apply_filter(criteria);
            state.set(new_state);
        })
    };

    let on_prev = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            let mut new_state = (*state).clone();
            new_state.view.prev_page();
            state.set(new_state);
        })
    };

    let on_next = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            let mut new_state = (*state).clone();
            new_state.view.next_page();
            state.set(new_state);
        })
    };

    let page = state.view.page_view();

    html! {
        <div class="app">
            <header class="header">
                <h1>{ "Usage" }</h1>
                <p class="subtitle">{ "Pages and documents processed per month" }</p>
            </header>

            <main class="main">
                <FilterBar
                    years={year_options(FIRST_YEAR, current_year())}
                    year={state.year_input.clone()}
                    month={state.month_input.clone()}
                    email={state.email_input.clone()}
                    {on_year}
                    {on_month}
                    {on_email}
                    {on_filter}
                />

                {
                    match &state.status {
                        LoadStatus::Loading => html! {
                            <div class="status">{ "Loading..." }</div>
                        },
                        LoadStatus::Unavailable(_) => html! {
                            <div class="status error">{ "No data available" }</div>
                        },
                        LoadStatus::Ready => html! {
                            <>
                                <DataTable records={page.records.to_vec()} />
                                <Pagination
                                    label={page.label()}
                                    has_prev={page.has_prev()}
                                    has_next={page.has_next()}
                                    {on_prev}
                                    {on_next}
                                />
                            </>
                        },
                    }
                }
            </main>

            <footer class="footer">
                <span>{ format!("{} of {} records", state.view.filtered_records().len(), state.view.total_records()) }</span>
            </footer>
        </div>
    }
}
