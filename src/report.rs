use serde::{Deserialize, Serialize};
use url::Url;

use crate::constants::{REPORT_ERROR_FORM_ENTRIES, REPORT_ERROR_FORM_URL};

/// Values prefilled into the bug report form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportErrorFields {
    pub url: String,
    pub network: String,
    pub platform: String,
    pub error: String,
}

/// Link to the bug report form with every field prefilled
pub fn build_report_error_url(fields: &ReportErrorFields) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(REPORT_ERROR_FORM_URL)?;
    url.query_pairs_mut()
        .append_pair("usp", "pp_url")
        .append_pair(REPORT_ERROR_FORM_ENTRIES.url, &fields.url)
        .append_pair(REPORT_ERROR_FORM_ENTRIES.network, &fields.network)
        .append_pair(REPORT_ERROR_FORM_ENTRIES.platform, &fields.platform)
        .append_pair(REPORT_ERROR_FORM_ENTRIES.error, &fields.error);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_report_error_url() {
        let fields = ReportErrorFields {
            url: "https://bridge.example/transfer?x=1".to_string(),
            network: "polygon-hermez".to_string(),
            platform: "Linux x86_64".to_string(),
            error: "execution reverted: amount & fee".to_string(),
        };

        let url = build_report_error_url(&fields).unwrap();
        assert!(url.as_str().starts_with(REPORT_ERROR_FORM_URL));

        let query: HashMap<_, _> = url.query_pairs().into_owned().collect();
        assert_eq!(query["usp"], "pp_url");
        assert_eq!(query["entry.2056392454"], fields.url);
        assert_eq!(query["entry.1632331664"], fields.network);
        assert_eq!(query["entry.259085709"], fields.platform);
        assert_eq!(query["entry.1383309652"], fields.error);
        assert!(!url.as_str().contains("amount & fee"));
    }
}
