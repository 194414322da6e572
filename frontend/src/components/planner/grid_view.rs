//! Planner page: the draggable destination list and the year by vacation-type
//! grid.
//!
//! Mouse users drag cards with the HTML5 drag-and-drop events. Touch users hold
//! a card for `TOUCH_HOLD_MS` and lift the finger over a cell; the cell is found
//! by hit testing because touch events stay bound to the card.

use common::model::assignment::CellKey;
use common::model::destination::Destination;
use common::model::vacation::VacationType;
use common::planner::drag::PointerKind;
use web_sys::{DragEvent, TouchEvent};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::PlannerComponent;

pub fn planner_page(component: &PlannerComponent, link: &Scope<PlannerComponent>) -> Html {
    html! {
        <div class="planner-page">
            <aside class="destination-list">
                <h2>{ "Destinations" }</h2>
                <p class="hint">{ "Drag a destination onto a vacation slot. On touch screens, press and hold." }</p>
                { for component.planner.destinations().iter().map(|d| destination_card(component, d, link)) }
            </aside>
            <section class="planner-grid">
                { build_grid(component, link) }
            </section>
        </div>
    }
}

fn destination_card(
    component: &PlannerComponent,
    destination: &Destination,
    link: &Scope<PlannerComponent>,
) -> Html {
    let dragging = component.drag.active() == Some(&destination.id);
    let holding = component.drag.pending() == Some(&destination.id);

    let ondragstart = {
        let id = destination.id.clone();
        link.callback(move |e: DragEvent| {
            if let Some(transfer) = e.data_transfer() {
                transfer.set_data("text/plain", id.as_str()).ok();
                transfer.set_effect_allowed("move");
            }
            Msg::DragStart { id: id.clone(), pointer: PointerKind::Mouse }
        })
    };
    let ontouchstart = {
        let id = destination.id.clone();
        link.callback(move |_: TouchEvent| Msg::DragStart {
            id: id.clone(),
            pointer: PointerKind::Touch,
        })
    };
    let ontouchend = link.callback(|e: TouchEvent| {
        let point = e.changed_touches().get(0);
        let (x, y) = point.map_or((-1, -1), |t| (t.client_x(), t.client_y()));
        Msg::TouchRelease { x, y }
    });

    let mut class = classes!("destination-card");
    if dragging {
        class.push("dragging");
    } else if holding {
        class.push("holding");
    }

    html! {
        <div
            key={destination.id.as_str().to_string()}
            class={class}
            draggable="true"
            {ondragstart}
            ondragend={link.callback(|_: DragEvent| Msg::DragEnd)}
            {ontouchstart}
            {ontouchend}
            ontouchcancel={link.callback(|_: TouchEvent| Msg::DragEnd)}
        >
            <div class="card-name">{ destination.name.clone() }</div>
            <div class="card-days">{ format!("{} days", destination.days) }</div>
            <div class="card-months">
                { for destination.months.iter().map(|m| html! { <span class="badge">{ m.name() }</span> }) }
            </div>
        </div>
    }
}

fn build_grid(component: &PlannerComponent, link: &Scope<PlannerComponent>) -> Html {
    let years: Vec<i32> = component.years().collect();

    html! {
        <table class="planner-table">
            <thead>
                <tr>
                    <th>{ "Vacation Type" }</th>
                    { for years.iter().map(|year| html! { <th>{ year.to_string() }</th> }) }
                </tr>
            </thead>
            <tbody>
                {
                    for VacationType::ALL.iter().map(|&vacation_type| html! {
                        <tr>
                            <td class={classes!("badge", vacation_type.slug())}>{ vacation_type.label() }</td>
                            { for years.iter().map(|&year| build_cell(component, CellKey::new(year, vacation_type), link)) }
                        </tr>
                    })
                }
            </tbody>
        </table>
    }
}

fn build_cell(component: &PlannerComponent, key: CellKey, link: &Scope<PlannerComponent>) -> Html {
    // `None` while nothing is dragged.
    let acceptable = component
        .drag
        .active()
        .map(|id| component.planner.accepts_drop(id, key.vacation_type));

    let ondragover = {
        let acceptable = acceptable.unwrap_or(false);
        Callback::from(move |e: DragEvent| {
            if acceptable {
                e.prevent_default();
            } else if let Some(transfer) = e.data_transfer() {
                transfer.set_drop_effect("none");
            }
        })
    };
    let ondrop = link.callback(move |e: DragEvent| {
        e.prevent_default();
        Msg::DropOn(key)
    });

    let planned = component.planner.destination_at(key);
    let content = match planned {
        Some(destination) => html! {
            <div class="cell-content">
                <button class="remove" title="Remove" onclick={link.callback(move |_| Msg::Unassign(key))}>
                    { "×" }
                </button>
                <div class="cell-name">{ destination.name.clone() }</div>
                <div class="cell-days">{ format!("{} days", destination.days) }</div>
            </div>
        },
        None if acceptable == Some(false) => html! {
            <div class="cell-empty">{ format!("Not valid for {}", key.vacation_type.required_month()) }</div>
        },
        None => html! { <div class="cell-empty">{ "Drop destination here" }</div> },
    };

    let class = classes!(
        "planner-cell",
        planned.map(|_| "filled"),
        (acceptable == Some(false)).then_some("invalid"),
    );

    html! {
        <td
            class={class}
            data-year={key.year.to_string()}
            data-vacation={key.vacation_type.slug()}
            {ondragover}
            {ondrop}
        >
            { content }
        </td>
    }
}
