use common::error::{PlannerError, PlannerResult};
use common::model::assignment::CellKey;
use common::model::destination::DestinationId;
use common::model::month::Month;
use common::planner::drag::PointerKind;
use common::planner::mutation::Change;
use common::repository::Snapshot;

use super::state::View;

pub enum Msg {
    Loaded(PlannerResult<Snapshot>),
    SetView(View),

    DragStart { id: DestinationId, pointer: PointerKind },
    HoldElapsed,
    DragEnd,
    DropOn(CellKey),
    TouchRelease { x: i32, y: i32 },
    Unassign(CellKey),

    OpenForm(Option<DestinationId>),
    CloseForm,
    FormName(String),
    FormDays(String),
    FormToggleMonth(Month),
    SubmitForm,
    DeleteDestination(DestinationId),

    Persisted(Change),
    Failed(PlannerError),
}
