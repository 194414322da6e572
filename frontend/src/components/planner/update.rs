//! Update function for the planner component.
//!
//! Elm-style: receives the current state, the `Context` and a `Msg`, mutates the
//! state and returns whether the view should re-render.
//!
//! Changes to destinations and the grid are never applied directly. The planner
//! stages a validated `Mutation`, the mutation is sent to the backend on a local
//! task, and the answer comes back as `Msg::Persisted` (committed) or
//! `Msg::Failed` (reported, nothing changes).

use common::error::PlannerError;
use common::planner::drag::{PointerKind, TOUCH_HOLD_MS};
use common::planner::mutation::{Change, Mutation};
use common::repository::PlannerRepository;
use gloo_console::{error, log};
use yew::platform::spawn_local;
use yew::prelude::*;

use super::helpers::{cell_at_point, now_ms, show_toast};
use super::messages::Msg;
use super::state::{DestinationForm, PlannerComponent};

pub fn update(component: &mut PlannerComponent, ctx: &Context<PlannerComponent>, msg: Msg) -> bool {
    match msg {
        Msg::Loaded(Ok(snapshot)) => {
            log!(format!(
                "loaded {} destinations and {} assignments",
                snapshot.destinations.len(),
                snapshot.assignments.len()
            ));
            component.planner.restore(snapshot);
            component.loading = false;
            true
        }
        Msg::Loaded(Err(err)) => {
            component.loading = false;
            report(&err);
            true
        }
        Msg::SetView(view) => {
            component.view = view;
            component.drag.end();
            true
        }

        Msg::DragStart { id, pointer } => {
            component.drag.start(id, pointer, now_ms());
            if pointer == PointerKind::Touch {
                let link = ctx.link().clone();
                spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(TOUCH_HOLD_MS as u32).await;
                    link.send_message(Msg::HoldElapsed);
                });
            }
            true
        }
        Msg::HoldElapsed => component.drag.hold_elapsed(now_ms()),
        Msg::DragEnd => {
            component.drag.end();
            true
        }
        Msg::DropOn(key) => {
            if let Some(id) = component.drag.drop_destination() {
                // Incompatible cells are already shown as such; the drop is ignored.
                if component.planner.accepts_drop(&id, key.vacation_type) {
                    stage(component, ctx, component.planner.stage_assign(key, &id));
                }
            }
            true
        }
        Msg::TouchRelease { x, y } => {
            component.drag.release(now_ms());
            if component.drag.active().is_some() {
                match cell_at_point(x, y) {
                    Some(key) => ctx.link().send_message(Msg::DropOn(key)),
                    None => component.drag.end(),
                }
            }
            true
        }
        Msg::Unassign(key) => {
            if let Some(mutation) = component.planner.stage_unassign(key) {
                persist(component, ctx, mutation);
            }
            false
        }

        Msg::OpenForm(id) => {
            component.form = match id {
                Some(id) => component.planner.destination(&id).map(DestinationForm::edit),
                None => Some(DestinationForm::blank()),
            };
            true
        }
        Msg::CloseForm => {
            component.form = None;
            true
        }
        Msg::FormName(name) => {
            if let Some(form) = &mut component.form {
                form.name = name;
            }
            true
        }
        Msg::FormDays(days) => {
            if let Some(form) = &mut component.form {
                form.days = days.trim().parse().unwrap_or(1);
            }
            true
        }
        Msg::FormToggleMonth(month) => {
            if let Some(form) = &mut component.form {
                if !form.months.remove(&month) {
                    form.months.insert(month);
                }
            }
            true
        }
        Msg::SubmitForm => {
            if let Some(form) = &component.form {
                let draft = form.draft();
                let staged = match &form.editing {
                    Some(id) => component.planner.stage_update(id, &draft),
                    None => component.planner.stage_add(&draft),
                };
                stage(component, ctx, staged);
            }
            false
        }
        Msg::DeleteDestination(id) => {
            stage(component, ctx, component.planner.stage_remove(&id));
            false
        }

        Msg::Persisted(change) => {
            let saved = matches!(change, Change::DestinationSaved(_));
            if let Err(err) = component.planner.commit(change) {
                report(&err);
            } else if saved {
                component.form = None;
            }
            true
        }
        Msg::Failed(err) => {
            report(&err);
            true
        }
    }
}

/// Persists a staged mutation, or reports why it was rejected.
fn stage(
    component: &PlannerComponent,
    ctx: &Context<PlannerComponent>,
    staged: Result<Mutation, PlannerError>,
) {
    match staged {
        Ok(mutation) => persist(component, ctx, mutation),
        Err(err) => report(&err),
    }
}

fn persist(component: &PlannerComponent, ctx: &Context<PlannerComponent>, mutation: Mutation) {
    let repo = component.planner.repository().clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        match repo.persist(mutation).await {
            Ok(change) => link.send_message(Msg::Persisted(change)),
            Err(err) => link.send_message(Msg::Failed(err)),
        }
    });
}

fn report(err: &PlannerError) {
    error!(err.to_string());
    show_toast(&err.to_string());
}
