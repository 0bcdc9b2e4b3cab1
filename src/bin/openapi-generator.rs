//! Dump the OpenAPI document as pretty-printed JSON.

use multimedia_vault::services::documentation::ApiDoc;
use utoipa::OpenApi;

fn main() {
    let doc = ApiDoc::openapi();
    println!("{}", doc.to_pretty_json().unwrap());
}
