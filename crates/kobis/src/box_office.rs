use crate::models::{BoxOfficeEntry, DailyBoxOfficeResponse};
use crate::KobisClient;

impl KobisClient {
    /// Get the daily box-office chart for a reporting date.
    /// GET /boxoffice/searchDailyBoxOfficeList.json?key={key}&targetDt=YYYYMMDD
    ///
    /// `target_dt` must be compact digits (`YYYYMMDD`); the registry rejects
    /// hyphenated dates.
    pub async fn daily_box_office(&self, target_dt: &str) -> crate::Result<Vec<BoxOfficeEntry>> {
        let url = self.url("/boxoffice/searchDailyBoxOfficeList.json");
        let response = self
            .client()
            .get(&url)
            .query(&[("key", self.api_key()), ("targetDt", target_dt)])
            .send()
            .await?;
        let parsed: DailyBoxOfficeResponse = self.handle_response(response).await?;
        Ok(parsed.box_office_result.daily_box_office_list)
    }
}
