use std::fs;
use tempfile::TempDir;

use plugmein_core::catalog::Catalog;
use plugmein_core::error::Error;
use plugmein_core::traits::CandidateSource;
use plugmein_core::types::Role;

#[test]
fn load_dir_concatenates_files_in_path_order() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path();
    fs::create_dir_all(dir.join("nested")).unwrap();
    fs::write(
        dir.join("b.json"),
        r#"{"gigs":[{"id":"g7","title":"Promo","org":"Label","city":"Portland, OR","distance":2,"paid":true}]}"#,
    )
    .unwrap();
    fs::write(
        dir.join("a.json"),
        r#"{"people":[{"id":"p7","name":"Rae","role":"Gaffer","city":"Eugene, OR","distance":40}]}"#,
    )
    .unwrap();
    fs::write(
        dir.join("nested/c.json"),
        r#"{"people":[{"id":"p8","name":"Lu","role":"MUA","city":"Portland, OR","distance":1,"tags":["mua"]}]}"#,
    )
    .unwrap();
    fs::write(dir.join("notes.txt"), "not a catalog").unwrap();

    let catalog = Catalog::load_dir(dir).expect("load catalog");

    let ids: Vec<&str> = catalog.people().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["p7", "p8"], "a.json before nested/c.json");
    assert_eq!(catalog.people()[0].role, Role::Other("Gaffer".into()));
    assert_eq!(catalog.people()[1].role, Role::Mua);
    assert_eq!(catalog.gigs().len(), 1);
    assert!(catalog.gigs()[0].tags.is_empty(), "missing tags default to empty");
    assert!(catalog.gigs()[0].rate.is_empty());
}

#[test]
fn load_dir_without_json_is_empty() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("readme.txt"), "nothing here").unwrap();
    let catalog = Catalog::load_dir(tmp.path()).expect("load catalog");
    assert!(catalog.is_empty());
}

#[test]
fn malformed_file_reports_its_path() {
    let tmp = TempDir::new().unwrap();
    let bad = tmp.path().join("broken.json");
    fs::write(&bad, "{ people: nope").unwrap();

    match Catalog::load_dir(tmp.path()) {
        Err(Error::Catalog { path, .. }) => assert_eq!(path, bad),
        other => panic!("expected catalog error, got {:?}", other),
    }
}

#[cfg(unix)]
#[test]
fn dangling_link_fails_the_load_with_its_path() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("a.json"),
        r#"{"people":[{"id":"p7","name":"Rae","role":"Director","city":"Eugene, OR","distance":4}]}"#,
    )
    .unwrap();
    let link = tmp.path().join("gone.json");
    std::os::unix::fs::symlink(tmp.path().join("missing.json"), &link).unwrap();

    match Catalog::load_dir(tmp.path()) {
        Err(Error::Io { path, .. }) => assert_eq!(path, link),
        other => panic!("expected io error, got {:?}", other),
    }
}

#[test]
fn posted_gigs_are_appended_after_existing_ones() {
    let mut catalog = Catalog::seed();
    let mut extra = catalog.gigs[0].clone();
    extra.id = "g3".into();
    catalog.push_gig(extra);
    assert_eq!(catalog.gigs.last().map(|g| g.id.as_str()), Some("g3"));
    assert_eq!(catalog.len(), 6);
}
