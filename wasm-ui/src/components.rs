//! UI Components for the usage table.

use usage_viewer::{MONTHS, Record, format_count};
use yew::prelude::*;

/// Year, month and email inputs plus the Filter button.
///
/// Inputs are only applied when the button is pressed.
#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
    pub years: Vec<i32>,
    pub year: String,
    pub month: String,
    pub email: String,
    pub on_year: Callback<String>,
    pub on_month: Callback<String>,
    pub on_email: Callback<String>,
    pub on_filter: Callback<()>,
}

#[function_component(FilterBar)]
pub fn filter_bar(props: &FilterBarProps) -> Html {
    let on_year_change = {
        let on_year = props.on_year.clone();
        Callback::from(move |e: Event| {
            let target: web_sys::HtmlSelectElement = e.target_unchecked_into();
            on_year.emit(target.value());
        })
    };

    let on_month_change = {
        let on_month = props.on_month.clone();
        Callback::from(move |e: Event| {
            let target: web_sys::HtmlSelectElement = e.target_unchecked_into();
            on_month.emit(target.value());
        })
    };

    let on_email_input = {
        let on_email = props.on_email.clone();
        Callback::from(move |e: InputEvent| {
            let target: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_email.emit(target.value());
        })
    };

    let on_filter_click = {
        let on_filter = props.on_filter.clone();
        Callback::from(move |_| {
            on_filter.emit(());
        })
    };

    html! {
        <div class="panel filter-panel">
            <label for="year">{ "Year" }</label>
            <select id="year" onchange={on_year_change}>
                <option value="" selected={props.year.is_empty()}>{ "All" }</option>
                { for props.years.iter().map(|y| {
                    let value = y.to_string();
                    html! {
                        <option value={value.clone()} selected={props.year == value}>{ value }</option>
                    }
                })}
            </select>

            <label for="month">{ "Month" }</label>
            <select id="month" onchange={on_month_change}>
                <option value="" selected={props.month.is_empty()}>{ "All" }</option>
                { for MONTHS.iter().map(|m| html! {
                    <option value={*m} selected={props.month == *m}>{ *m }</option>
                })}
            </select>

            <label for="email">{ "Email" }</label>
            <input
                id="email"
                type="text"
                value={props.email.clone()}
                oninput={on_email_input}
                placeholder="contains..."
                spellcheck="false"
            />

            <button class="filter-button" onclick={on_filter_click}>
                { "Filter" }
            </button>
        </div>
    }
}

/// The visible page of records.
#[derive(Properties, PartialEq)]
pub struct DataTableProps {
    pub records: Vec<Record>,
}

#[function_component(DataTable)]
pub fn data_table(props: &DataTableProps) -> Html {
    html! {
        <table id="dataTable" class="data-table">
            <thead>
                <tr>
                    <th>{ "Year" }</th>
                    <th>{ "Month" }</th>
                    <th>{ "Email" }</th>
                    <th>{ "Model" }</th>
                    <th class="num">{ "Pages" }</th>
                    <th class="num">{ "Documents" }</th>
                </tr>
            </thead>
            <tbody>
                { for props.records.iter().map(|r| html! {
                    <tr>
                        <td>{ r.year.to_string() }</td>
                        <td>{ &r.month }</td>
                        <td>{ &r.email }</td>
                        <td>{ &r.model_id }</td>
                        <td class="num">{ format_count(r.pages) }</td>
                        <td class="num">{ format_count(r.documents) }</td>
                    </tr>
                })}
            </tbody>
        </table>
    }
}

/// Prev/Next buttons and the "Page N of M" label.
#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub label: String,
    pub has_prev: bool,
    pub has_next: bool,
    pub on_prev: Callback<()>,
    pub on_next: Callback<()>,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let on_prev_click = {
        let on_prev = props.on_prev.clone();
        Callback::from(move |_| on_prev.emit(()))
    };
    let on_next_click = {
        let on_next = props.on_next.clone();
        Callback::from(move |_| on_next.emit(()))
    };

    html! {
        <div class="pagination">
            <button id="prevPage" disabled={!props.has_prev} onclick={on_prev_click}>
                { "Previous" }
            </button>
            <span id="pageInfo">{ &props.label }</span>
            <button id="nextPage" disabled={!props.has_next} onclick={on_next_click}>
                { "Next" }
            </button>
        </div>
    }
}
