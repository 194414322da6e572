//! Planner page: root component wiring the Yew `Component` implementation with
//! submodules for state, update logic, views and browser helpers.
//!
//! Responsibilities
//! - Re-export `Msg` and `PlannerComponent`.
//! - Delegate to `update::update` and `view::view`.
//! - On first render, fetch destinations and assignments from the backend.

use common::repository::PlannerRepository;
use yew::platform::spawn_local;
use yew::prelude::*;

mod admin_view;
mod grid_view;
mod helpers;
mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::PlannerComponent;

impl Component for PlannerComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        PlannerComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            let repo = self.planner.repository().clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::Loaded(repo.snapshot().await));
            });
        }
    }
}
