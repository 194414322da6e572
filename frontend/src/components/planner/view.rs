//! View rendering for the planner component.
//!
//! A navbar switches between the planning grid and the destination admin
//! page. Both pages render from the same `Planner` state.

use super::admin_view::admin_page;
use super::grid_view::planner_page;
use super::messages::Msg;
use super::state::{PlannerComponent, View};
use yew::html::Scope;
use yew::prelude::*;

pub fn view(component: &PlannerComponent, ctx: &Context<PlannerComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="planner-root">
            { build_navbar(component.view, link) }
            <main class="planner-main">
                {
                    if component.loading {
                        html! { <div class="loading">{ "Loading destinations..." }</div> }
                    } else {
                        match component.view {
                            View::Planner => planner_page(component, link),
                            View::Admin => admin_page(component, link),
                        }
                    }
                }
            </main>
        </div>
    }
}

fn build_navbar(active: View, link: &Scope<PlannerComponent>) -> Html {
    let tab = |view: View, label: &'static str| {
        let class = if active == view { "nav-link active" } else { "nav-link" };
        html! {
            <button class={class} onclick={link.callback(move |_| Msg::SetView(view))}>
                { label }
            </button>
        }
    };

    html! {
        <nav class="navbar">
            <span class="brand">{ "Travel Planner" }</span>
            <div class="nav-links">
                { tab(View::Planner, "Travel Planner") }
                { tab(View::Admin, "Admin Panel") }
            </div>
        </nav>
    }
}
