use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use kobis::{BoxOfficeEntry, KobisClient};

use crate::{dates, ArchiveError, RegistryProvider};

/// Registry provider backed by KOBIS.
pub struct KobisRegistry {
    client: Arc<KobisClient>,
}

impl KobisRegistry {
    pub fn new(client: Arc<KobisClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RegistryProvider for KobisRegistry {
    async fn daily_box_office(&self, date: NaiveDate) -> Result<Vec<BoxOfficeEntry>, ArchiveError> {
        let target_dt = dates::to_compact(date);
        Ok(self.client.daily_box_office(&target_dt).await?)
    }
}
