//! Local stand-ins for the remote services and the DSSP executable.

#![allow(dead_code)]

use axum::extract::Path as UrlPath;
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use std::path::{Path, PathBuf};

/// Model files whose name starts with this prefix are answered with 404.
pub const MISSING_PREFIX: &str = "MISSING";
/// Model files whose name starts with this prefix are answered with 500.
pub const BROKEN_PREFIX: &str = "BROKEN";

pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

async fn model_file(UrlPath(name): UrlPath<String>) -> (StatusCode, String) {
    let accession = name
        .strip_prefix("AF-")
        .and_then(|rest| rest.split("-F1-").next())
        .unwrap_or_default();

    if accession.starts_with(MISSING_PREFIX) {
        (StatusCode::NOT_FOUND, "Not Found".to_string())
    } else if accession.starts_with(BROKEN_PREFIX) {
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
    } else {
        let body = std::fs::read_to_string(fixture("AF-P69905-F1-model_v2.pdb"))
            .unwrap_or_default()
            .replace("P69905", accession);
        (StatusCode::OK, body)
    }
}

async fn uniprot_entry(UrlPath(entry): UrlPath<String>) -> (StatusCode, String) {
    let accession = entry.trim_end_matches(".json");
    if accession.starts_with(MISSING_PREFIX) {
        (StatusCode::NOT_FOUND, "Not Found".to_string())
    } else if accession.starts_with(BROKEN_PREFIX) {
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
    } else {
        (
            StatusCode::OK,
            format!(r#"{{"primaryAccession":"{}","entryType":"UniProtKB reviewed (Swiss-Prot)"}}"#, accession),
        )
    }
}

/// Start a server mimicking AlphaFold DB (`/files/...`) and UniProt (`/uniprot/...`).
/// Returns its base URL.
pub async fn spawn_server() -> String {
    let app = Router::new()
        .route("/files/{name}", get(model_file))
        .route("/uniprot/{entry}", get(uniprot_entry));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// A base URL on which nothing is listening.
pub async fn closed_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// Write an executable shell script that behaves like `mkdssp <in> -o <out>`,
/// copying the fixture report to `<out>`.
#[cfg(unix)]
pub fn fake_dssp(dir: &Path) -> PathBuf {
    let script = format!(
        "#!/bin/sh\n[ -f \"$1\" ] || {{ echo \"no such file: $1\" >&2; exit 3; }}\n[ \"$2\" = \"-o\" ] || exit 2\ncp '{}' \"$3\"\n",
        fixture("result.dssp").display()
    );
    write_script(dir, "fake-dssp", &script)
}

/// Write an executable shell script that always fails.
#[cfg(unix)]
pub fn failing_dssp(dir: &Path) -> PathBuf {
    write_script(dir, "failing-dssp", "#!/bin/sh\necho 'cannot parse structure' >&2\nexit 1\n")
}

#[cfg(unix)]
fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, body).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}
