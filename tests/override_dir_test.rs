//! Behavior of the user override folder: auto-creation on first use and
//! its always-last, `"file"`-tagged contribution.

use std::fs;
use std::io::Write;

use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use staticdata::{Identifier, ModSource, StaticData, FILE_SOURCE_ID};

fn no_sources() -> Vec<ModSource> {
    Vec::new()
}

#[test]
fn override_folder_is_created_on_first_query() {
    let base = TempDir::new().unwrap();
    let data_dir = base.path().join("staticdata");
    assert!(!data_dir.exists());

    let data = StaticData::new(no_sources(), base.path());
    let items = data.exact(&Identifier::new("examplemod", "conf.json"));

    // The folder exists afterwards, but contributed nothing this call.
    assert!(data_dir.is_dir());
    assert!(items.is_empty());
    assert_eq!(data.data_dir(), data_dir);
}

#[test]
fn override_content_resolves_on_later_queries() {
    let base = TempDir::new().unwrap();
    let data = StaticData::new(no_sources(), base.path());
    let conf = Identifier::new("examplemod", "conf.json");

    assert!(data.exact(&conf).is_empty());

    let target = base.path().join("staticdata/examplemod/conf.json");
    fs::create_dir_all(target.parent().unwrap()).unwrap();
    fs::write(&target, b"user data").unwrap();

    let items = data.exact(&conf);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].source_id(), FILE_SOURCE_ID);
    assert_eq!(items[0].resource_id(), &conf);
    assert_eq!(items[0].read_bytes().unwrap(), b"user data");
}

#[test]
fn override_packs_are_scanned_like_mod_packs() {
    let base = TempDir::new().unwrap();
    fs::create_dir(base.path().join("staticdata")).unwrap();

    let pack = base.path().join("staticdata/user-pack.zip");
    let mut writer = ZipWriter::new(fs::File::create(&pack).unwrap());
    writer
        .start_file("staticdata/examplemod/conf.json", SimpleFileOptions::default())
        .unwrap();
    writer.write_all(b"packed override").unwrap();
    writer.finish().unwrap();

    let data = StaticData::new(no_sources(), base.path());
    let items = data.exact(&Identifier::new("examplemod", "conf.json"));

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].source_id(), FILE_SOURCE_ID);
    assert_eq!(items[0].read_bytes().unwrap(), b"packed override");
}

#[test]
fn broken_override_pack_still_yields_loose_matches() {
    let base = TempDir::new().unwrap();
    let conf = Identifier::new("examplemod", "conf.json");

    fs::create_dir_all(base.path().join("staticdata/examplemod")).unwrap();
    fs::write(base.path().join("staticdata/not-a-pack.zip"), b"junk").unwrap();
    fs::write(
        base.path().join("staticdata/examplemod/conf.json"),
        b"still here",
    )
    .unwrap();

    let data = StaticData::new(no_sources(), base.path());
    let items = data.exact(&conf);

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].read_bytes().unwrap(), b"still here");
}
