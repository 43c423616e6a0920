use crate::model::{CreateUser, User};

use super::client::ApiClient;
use super::envelope::{decode_list, decode_one};
use super::error::ApiError;

const USERS: &str = "users";

/// Gateway for `/users`. Users are create-only from the client.
#[derive(Clone)]
pub struct UserApi {
    client: ApiClient,
}

impl UserApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<User>, ApiError> {
        let body = self.client.get(&[USERS]).await?;
        decode_list(&body)
    }

    pub async fn get(&self, id: &str) -> Result<User, ApiError> {
        let body = self.client.get(&[USERS, id]).await?;
        decode_one(&body)
    }

    pub async fn create(&self, payload: &CreateUser) -> Result<User, ApiError> {
        let body = self.client.post(&[USERS], payload).await?;
        decode_one(&body)
    }
}
