//! `PlannerRepository` over the backend's REST API.
//!
//! Every request goes to the same origin that served the page. Non-2xx answers
//! become `PlannerError::Persistence` carrying the status and the server's
//! message; the planner has already validated the change locally, so the
//! server's reason is only shown to the user.

use async_trait::async_trait;
use common::error::{PlannerError, PlannerResult};
use common::model::assignment::{Assignment, CellKey};
use common::model::destination::{Destination, DestinationDraft, DestinationId};
use common::repository::PlannerRepository;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

const DESTINATIONS: &str = "/api/destinations";
const ASSIGNMENTS: &str = "/api/assignments";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct HttpRepository;

impl HttpRepository {
    pub fn new() -> Self {
        HttpRepository
    }
}

fn destination_url(id: &DestinationId) -> String {
    format!(
        "{}/{}",
        DESTINATIONS,
        String::from(js_sys::encode_uri_component(id.as_str()))
    )
}

async fn checked(response: Result<Response, gloo_net::Error>) -> PlannerResult<Response> {
    let response = response.map_err(PlannerError::persistence)?;
    if response.ok() {
        Ok(response)
    } else {
        let status = response.status();
        let message = response.text().await.unwrap_or_default();
        Err(PlannerError::Persistence(format!("{} {}", status, message)))
    }
}

async fn read_json<T: DeserializeOwned>(response: Result<Response, gloo_net::Error>) -> PlannerResult<T> {
    checked(response)
        .await?
        .json::<T>()
        .await
        .map_err(PlannerError::persistence)
}

#[async_trait(?Send)]
impl PlannerRepository for HttpRepository {
    async fn list_destinations(&self) -> PlannerResult<Vec<Destination>> {
        read_json(Request::get(DESTINATIONS).send().await).await
    }

    async fn create_destination(&self, draft: &DestinationDraft) -> PlannerResult<Destination> {
        let request = Request::post(DESTINATIONS)
            .json(draft)
            .map_err(PlannerError::persistence)?;
        read_json(request.send().await).await
    }

    async fn update_destination(
        &self,
        id: &DestinationId,
        draft: &DestinationDraft,
    ) -> PlannerResult<Destination> {
        let request = Request::put(&destination_url(id))
            .json(draft)
            .map_err(PlannerError::persistence)?;
        read_json(request.send().await).await
    }

    async fn delete_destination(&self, id: &DestinationId) -> PlannerResult<()> {
        checked(Request::delete(&destination_url(id)).send().await).await?;
        Ok(())
    }

    async fn list_assignments(&self) -> PlannerResult<Vec<Assignment>> {
        read_json(Request::get(ASSIGNMENTS).send().await).await
    }

    async fn upsert_assignment(&self, assignment: &Assignment) -> PlannerResult<()> {
        let request = Request::put(ASSIGNMENTS)
            .json(assignment)
            .map_err(PlannerError::persistence)?;
        checked(request.send().await).await?;
        Ok(())
    }

    async fn delete_assignment(&self, key: CellKey) -> PlannerResult<()> {
        let url = format!("{}/{}/{}", ASSIGNMENTS, key.year, key.vacation_type.slug());
        checked(Request::delete(&url).send().await).await?;
        Ok(())
    }
}
