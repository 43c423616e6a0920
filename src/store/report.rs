//! Dashboard aggregate. Read only, so it gets a smaller state than the
//! resource slices.

use crate::api::ReportApi;
use crate::model::TaskReport;
use crate::mvi::{Intent, Reducer, UiState};

use super::cell::{ChangeListener, OpResult, StateCell};
use super::slice::RequestId;

pub const FETCH_REPORT_ERROR: &str = "Failed to fetch Report";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportState {
    pub report: Option<TaskReport>,
    pub error: Option<String>,
    in_flight: Vec<RequestId>,
}

impl UiState for ReportState {}

impl ReportState {
    pub fn loading(&self) -> bool {
        !self.in_flight.is_empty()
    }

    fn settle(&mut self, request: RequestId) -> bool {
        let before = self.in_flight.len();
        self.in_flight.retain(|id| *id != request);
        self.in_flight.len() != before
    }
}

#[derive(Debug, Clone)]
pub enum ReportIntent {
    Requested(RequestId),
    Fetched {
        request: RequestId,
        report: TaskReport,
    },
    Rejected {
        request: RequestId,
        message: String,
    },
    Reset,
}

impl Intent for ReportIntent {}

pub struct ReportReducer;

impl Reducer for ReportReducer {
    type State = ReportState;
    type Intent = ReportIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ReportIntent::Requested(request) => {
                state.error = None;
                state.in_flight.push(request);
            }
            ReportIntent::Fetched { request, report } => {
                if state.settle(request) {
                    state.report = Some(report);
                }
            }
            ReportIntent::Rejected { request, message } => {
                if state.settle(request) {
                    state.error = Some(message);
                }
            }
            ReportIntent::Reset => return ReportState::default(),
        }
        state
    }
}

#[derive(Clone)]
pub struct ReportStore {
    cell: StateCell<ReportReducer>,
    api: ReportApi,
}

impl ReportStore {
    pub fn new(api: ReportApi, listener: Option<ChangeListener>) -> Self {
        Self {
            cell: StateCell::new("report", listener),
            api,
        }
    }

    pub fn state(&self) -> ReportState {
        self.cell.snapshot()
    }

    pub async fn fetch(&self) -> OpResult<TaskReport> {
        let request = RequestId::new();
        self.cell
            .run(
                ReportIntent::Requested(request),
                self.api.task_report(),
                FETCH_REPORT_ERROR,
                |report: &TaskReport| ReportIntent::Fetched {
                    request,
                    report: report.clone(),
                },
                |message| ReportIntent::Rejected { request, message },
            )
            .await
    }

    pub fn reset(&self) {
        self.cell.dispatch(ReportIntent::Reset);
    }
}
