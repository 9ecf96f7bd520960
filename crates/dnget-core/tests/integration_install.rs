//! Integration test: local HTTP server serving a releases index, a channel
//! release list and an archive; drives `install` through `CurlTransport`.

mod common;

use common::catalog_server::CatalogServer;
use dnget_core::checksum;
use dnget_core::transport::{fetch_and_verify, CurlTransport};
use dnget_core::{install, resolve, ChannelSpec, InstallError, InstallRequest};
use std::time::Duration;
use tempfile::tempdir;

fn transport() -> CurlTransport {
    CurlTransport::new(Duration::from_secs(5), Duration::from_secs(30))
}

/// Publishes an index with one LTS channel "8.0" whose newest release ships
/// SDK 8.0.203 with a linux-x64 tarball (and an installer listed before it).
fn publish_catalog(server: &CatalogServer, archive: &[u8], hash: &str) {
    let index = format!(
        r#"{{ "releases-index": [
            {{ "channel-version": "9.0", "release-type": "sts", "releases.json": "{}" }},
            {{ "channel-version": "8.0", "release-type": "lts", "releases.json": "{}" }}
        ] }}"#,
        server.url("/9.0/releases.json"),
        server.url("/8.0/releases.json"),
    );
    let releases = format!(
        r#"{{ "releases": [ {{
            "release-version": "8.0.3",
            "sdks": [ {{
                "version": "8.0.203",
                "files": [
                    {{ "name": "dotnet-sdk-8.0.203-linux-x64.deb", "rid": "linux-x64", "url": "{}", "hash": "00" }},
                    {{ "name": "dotnet-sdk-8.0.203-linux-x64.tar.gz", "rid": "linux-x64", "url": "{}", "hash": "{}" }}
                ]
            }} ]
        }} ] }}"#,
        server.url("/sdk/dotnet-sdk-8.0.203-linux-x64.deb"),
        server.url("/sdk/dotnet-sdk-8.0.203-linux-x64.tar.gz"),
        hash,
    );
    server.serve("/releases-index.json", index);
    server.serve("/8.0/releases.json", releases);
    server.serve("/sdk/dotnet-sdk-8.0.203-linux-x64.tar.gz", archive.to_vec());
}

fn expected_digest(archive: &[u8]) -> String {
    let scratch = tempdir().unwrap();
    let path = scratch.path().join("archive");
    std::fs::write(&path, archive).unwrap();
    checksum::sha512_path(&path).unwrap()
}

#[test]
fn lts_install_downloads_verified_archive() {
    let archive: Vec<u8> = (0u8..=255).cycle().take(96 * 1024).collect();
    let server = CatalogServer::start();
    publish_catalog(&server, &archive, &expected_digest(&archive));

    let dest = tempdir().unwrap();
    let request = InstallRequest::new(ChannelSpec::Lts, "linux", "x86_64");
    let installed = install(
        &transport(),
        &server.url("/releases-index.json"),
        &request,
        dest.path(),
    )
    .expect("install");

    assert_eq!(installed.artifact.rid, "linux-x64");
    assert_eq!(installed.artifact.release_version, "8.0.3");
    assert_eq!(
        installed.path,
        dest.path().join("dotnet-sdk-8.0.203-linux-x64.tar.gz")
    );
    assert_eq!(std::fs::read(&installed.path).unwrap(), archive);
}

#[test]
fn corrupted_archive_fails_integrity_check() {
    let archive = b"the real archive".to_vec();
    let server = CatalogServer::start();
    publish_catalog(&server, &archive, &expected_digest(b"some other archive"));

    let dest = tempdir().unwrap();
    let request = InstallRequest::new(ChannelSpec::parse("8.0").unwrap(), "linux", "x64");
    let err = install(
        &transport(),
        &server.url("/releases-index.json"),
        &request,
        dest.path(),
    )
    .unwrap_err();
    assert!(
        matches!(err, InstallError::IntegrityMismatch { .. }),
        "got {err:?}"
    );
}

#[test]
fn missing_release_list_is_fetch_error() {
    let server = CatalogServer::start();
    publish_catalog(&server, b"x", "00");

    let request = InstallRequest::new(ChannelSpec::Sts, "linux", "x64");
    match resolve(&transport(), &server.url("/releases-index.json"), &request) {
        Err(InstallError::FetchError { url, reason }) => {
            assert!(url.ends_with("/9.0/releases.json"));
            assert!(reason.contains("404"), "reason: {reason}");
        }
        other => panic!("expected FetchError, got {other:?}"),
    }
}

#[test]
fn interrupted_archive_download_fails_and_keeps_partial_file() {
    let archive: Vec<u8> = (0u8..100).cycle().take(1000).collect();
    let server = CatalogServer::start();
    publish_catalog(&server, &archive, &expected_digest(&archive));
    server.serve_truncated(
        "/sdk/dotnet-sdk-8.0.203-linux-x64.tar.gz",
        archive.len(),
        archive[..10].to_vec(),
    );

    let dest = tempdir().unwrap();
    let request = InstallRequest::new(ChannelSpec::Lts, "linux", "x64");
    let err = install(
        &transport(),
        &server.url("/releases-index.json"),
        &request,
        dest.path(),
    )
    .unwrap_err();
    match err {
        InstallError::FetchError { url, .. } => {
            assert!(url.ends_with("/sdk/dotnet-sdk-8.0.203-linux-x64.tar.gz"))
        }
        other => panic!("expected FetchError, got {other:?}"),
    }

    let partial = dest.path().join("dotnet-sdk-8.0.203-linux-x64.tar.gz");
    assert!(partial.exists(), "partial archive should be left on disk");
    assert_eq!(std::fs::read(&partial).unwrap(), archive[..10].to_vec());
}

#[test]
fn missing_archive_is_fetch_error() {
    let server = CatalogServer::start();
    let dest = tempdir().unwrap();
    let url = server.url("/sdk/dotnet-sdk-8.0.203-linux-x64.tar.gz");

    match fetch_and_verify(&transport(), &url, "00", dest.path()) {
        Err(InstallError::FetchError { url: failed, .. }) => assert_eq!(failed, url),
        other => panic!("expected FetchError, got {other:?}"),
    }
}
