use crate::model::TaskReport;

use super::client::ApiClient;
use super::envelope::decode_one;
use super::error::ApiError;

#[derive(Clone)]
pub struct ReportApi {
    client: ApiClient,
}

impl ReportApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn task_report(&self) -> Result<TaskReport, ApiError> {
        let body = self.client.get(&["reports", "tasks"]).await?;
        decode_one(&body)
    }
}
