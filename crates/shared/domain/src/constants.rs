/// Public demo API serving the province and territory collections.
pub const API_BASE_URL: &str = "https://my-json-server.typicode.com/simonachkar/demo-canada-api-server";

pub const PROVINCES: &str = "provinces";
pub const TERRITORIES: &str = "territories";

pub const SHOW_CAPITAL: &str = "Show Capital";
pub const HIDE_CAPITAL: &str = "Hide Capital";

/// Suffix appended to a region name to build the flag image's accessible label.
pub const FLAG_ALT_SUFFIX: &str = "'s Flag";
