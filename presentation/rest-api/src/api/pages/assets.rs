use poem::http::StatusCode;
use poem::web::Path;
use poem::{Response, handler};

pub const INDEX_HTML: &str = include_str!("../../../templates/index.html");
pub const OPINION_HTML: &str = include_str!("../../../templates/opinion.html");
pub const SUMMARY_HTML: &str = include_str!("../../../templates/summary.html");

const SCRIPT_JS: &str = include_str!("../../../static/script.js");
const OPINION_JS: &str = include_str!("../../../static/opinion.js");
const SUMMARY_JS: &str = include_str!("../../../static/summary.js");

fn script(file: &str) -> Option<&'static str> {
    match file {
        "script.js" => Some(SCRIPT_JS),
        "opinion.js" => Some(OPINION_JS),
        "summary.js" => Some(SUMMARY_JS),
        _ => None,
    }
}

/// Serves the embedded page scripts under `/static/:file`.
#[handler]
pub fn static_asset(Path(file): Path<String>) -> Response {
    match script(&file) {
        Some(body) => Response::builder()
            .content_type("application/javascript; charset=utf-8")
            .body(body),
        None => Response::builder()
            .status(StatusCode::NOT_FOUND)
            .body("Not found"),
    }
}
