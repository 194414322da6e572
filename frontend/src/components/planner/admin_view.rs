//! Admin page: destination form and the destination table.

use common::model::destination::{Destination, MAX_DAYS, MIN_DAYS};
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::{DestinationForm, PlannerComponent};

pub fn admin_page(component: &PlannerComponent, link: &Scope<PlannerComponent>) -> Html {
    html! {
        <div class="admin-page">
            <div class="admin-header">
                <h2>{ "Manage Destinations" }</h2>
                <button
                    class="add-button"
                    disabled={component.form.is_some()}
                    onclick={link.callback(|_| Msg::OpenForm(None))}
                >
                    { "Add Destination" }
                </button>
            </div>
            {
                match &component.form {
                    Some(form) => build_form(form, link),
                    None => html! {},
                }
            }
            { build_table(component.planner.destinations(), link) }
        </div>
    }
}

fn build_form(form: &DestinationForm, link: &Scope<PlannerComponent>) -> Html {
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::SubmitForm
    });
    let oninput_name = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::FormName(input.value())
    });
    let oninput_days = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::FormDays(input.value())
    });
    let title = if form.editing.is_some() { "Edit Destination" } else { "Add New Destination" };
    let submit = if form.editing.is_some() { "Update Destination" } else { "Add Destination" };

    html! {
        <form class="destination-form" {onsubmit}>
            <h3>{ title }</h3>
            <label for="destination-name">{ "Destination Name" }</label>
            <input
                id="destination-name"
                value={form.name.clone()}
                placeholder="Enter destination name"
                oninput={oninput_name}
            />

            <label for="destination-days">{ "Number of Days" }</label>
            <input
                id="destination-days"
                type="number"
                min={MIN_DAYS.to_string()}
                max={MAX_DAYS.to_string()}
                value={form.days.to_string()}
                oninput={oninput_days}
            />

            <label>{ "Travel Months (select multiple)" }</label>
            <div class="month-options">
                {
                    for form.offered_months().into_iter().map(|month| {
                        let id = format!("month-{}", month.name().to_lowercase());
                        html! {
                            <label for={id.clone()} class="month-option">
                                <input
                                    id={id}
                                    type="checkbox"
                                    checked={form.months.contains(&month)}
                                    onchange={link.callback(move |_: Event| Msg::FormToggleMonth(month))}
                                />
                                { month.name() }
                            </label>
                        }
                    })
                }
            </div>

            <div class="form-actions">
                <button type="submit" class="submit" disabled={!form.is_submittable()}>{ submit }</button>
                <button type="button" onclick={link.callback(|_| Msg::CloseForm)}>{ "Cancel" }</button>
            </div>
        </form>
    }
}

fn build_table(destinations: &[Destination], link: &Scope<PlannerComponent>) -> Html {
    if destinations.is_empty() {
        return html! {
            <div class="empty">{ "No destinations found. Add your first destination to get started!" }</div>
        };
    }

    html! {
        <table class="destination-table">
            <thead>
                <tr>
                    <th>{ "Destination" }</th>
                    <th>{ "Duration" }</th>
                    <th>{ "Best Months" }</th>
                    <th>{ "Actions" }</th>
                </tr>
            </thead>
            <tbody>
                {
                    for destinations.iter().map(|destination| {
                        let edit = destination.id.clone();
                        let delete = destination.id.clone();
                        html! {
                            <tr key={destination.id.as_str().to_string()}>
                                <td>{ destination.name.clone() }</td>
                                <td>{ format!("{} days", destination.days) }</td>
                                <td>
                                    { for destination.months.iter().map(|m| html! { <span class="badge">{ m.name() }</span> }) }
                                </td>
                                <td class="actions">
                                    <button onclick={link.callback(move |_| Msg::OpenForm(Some(edit.clone())))}>{ "Edit" }</button>
                                    <button class="danger" onclick={link.callback(move |_| Msg::DeleteDestination(delete.clone()))}>
                                        { "Delete" }
                                    </button>
                                </td>
                            </tr>
                        }
                    })
                }
            </tbody>
        </table>
    }
}
