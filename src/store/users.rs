use crate::api::UserApi;
use crate::model::{CreateUser, User};

use super::cell::{ChangeListener, OpResult, StateCell};
use super::intent::SliceIntent;
use super::reducer::SliceReducer;
use super::slice::{Operation, RequestId, ResourceSlice};

pub const FETCH_USERS_ERROR: &str = "Failed to fetch users";
pub const FETCH_USER_ERROR: &str = "Failed to fetch user";
pub const CREATE_USER_ERROR: &str = "Failed to create user";

/// User slice. The client can list, look up and create users, nothing else.
#[derive(Clone)]
pub struct UserStore {
    cell: StateCell<SliceReducer<User>>,
    api: UserApi,
}

impl UserStore {
    pub fn new(api: UserApi, listener: Option<ChangeListener>) -> Self {
        Self {
            cell: StateCell::new("users", listener),
            api,
        }
    }

    pub fn state(&self) -> ResourceSlice<User> {
        self.cell.snapshot()
    }

    pub async fn fetch_all(&self) -> OpResult<Vec<User>> {
        let request = RequestId::new();
        self.cell
            .run(
                SliceIntent::Requested {
                    request,
                    op: Operation::FetchAll,
                },
                self.api.list(),
                FETCH_USERS_ERROR,
                |items: &Vec<User>| SliceIntent::FetchedAll {
                    request,
                    items: items.clone(),
                },
                |message| SliceIntent::Rejected { request, message },
            )
            .await
    }

    pub async fn fetch_one(&self, id: &str) -> OpResult<User> {
        let request = RequestId::new();
        self.cell
            .run(
                SliceIntent::Requested {
                    request,
                    op: Operation::FetchOne,
                },
                self.api.get(id),
                FETCH_USER_ERROR,
                |item: &User| SliceIntent::FetchedOne {
                    request,
                    item: item.clone(),
                },
                |message| SliceIntent::Rejected { request, message },
            )
            .await
    }

    pub async fn create(&self, payload: CreateUser) -> OpResult<User> {
        let request = RequestId::new();
        self.cell
            .run(
                SliceIntent::Requested {
                    request,
                    op: Operation::Create,
                },
                self.api.create(&payload),
                CREATE_USER_ERROR,
                |item: &User| SliceIntent::Created {
                    request,
                    item: item.clone(),
                },
                |message| SliceIntent::Rejected { request, message },
            )
            .await
    }

    pub fn clear_error(&self) {
        self.cell.dispatch(SliceIntent::ClearError);
    }

    pub fn reset(&self) {
        self.cell.dispatch(SliceIntent::Reset);
    }
}
