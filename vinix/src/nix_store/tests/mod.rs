use super::*;

use std::ffi::OsStr;

use crate::testing::RecordingRunner;

fn parse(path: &str) -> ParsedName {
    StorePath::new(path).parse()
}

#[test]
fn test_parse_name_and_version() {
    assert_eq!(
        ParsedName::Package {
            hash: "ia70ss13m22znbl8khrf2hq72qmh5drr".to_string(),
            name: "ruby".to_string(),
            version: Some("2.7.5".to_string()),
        },
        parse("/nix/store/ia70ss13m22znbl8khrf2hq72qmh5drr-ruby-2.7.5"),
    );
}

#[test]
fn test_parse_name_only() {
    assert_eq!(
        ParsedName::Package {
            hash: "7yw3rm6ccr6s2w6hnpzv1wkyyfsxjp3d".to_string(),
            name: "bar".to_string(),
            version: None,
        },
        parse("/nix/store/7yw3rm6ccr6s2w6hnpzv1wkyyfsxjp3d-bar"),
    );
}

#[test]
fn test_parse_multi_token_remainder() {
    // Everything after the name's delimiter belongs to the version.
    assert_eq!(
        ParsedName::Package {
            hash: "3iq73s1p4mh4mrflj2k1whkzsimxf0l7".to_string(),
            name: "gcc".to_string(),
            version: Some("wrapper-9.3.0".to_string()),
        },
        parse("/nix/store/3iq73s1p4mh4mrflj2k1whkzsimxf0l7-gcc-wrapper-9.3.0"),
    );
}

#[test]
fn test_parse_hash_length_rule() {
    // The first token must be exactly 32 characters; character set
    // is not checked, so a hash full of 'e's is still a hash.
    assert_eq!(
        ParsedName::Package {
            hash: "eeeeeeeeeeeeeeeeeeeeeeeeeeeeeeee".to_string(),
            name: "foo".to_string(),
            version: None,
        },
        parse("/nix/store/eeeeeeeeeeeeeeeeeeeeeeeeeeeeeeee-foo"),
    );

    // One character short: the whole base name is opaque.
    assert_eq!(
        ParsedName::Opaque("ia70ss13m22znbl8khrf2hq72qmh5dr-foo".to_string()),
        parse("/nix/store/ia70ss13m22znbl8khrf2hq72qmh5dr-foo"),
    );

    // One character long: same.
    assert_eq!(
        ParsedName::Opaque("ia70ss13m22znbl8khrf2hq72qmh5drrx-foo".to_string()),
        parse("/nix/store/ia70ss13m22znbl8khrf2hq72qmh5drrx-foo"),
    );
}

#[test]
fn test_parse_opaque() {
    assert_eq!(
        ParsedName::Opaque("no_delimiter_here".to_string()),
        parse("/nix/store/no_delimiter_here"),
    );

    // 32 characters but no delimiter at all.
    assert_eq!(
        ParsedName::Opaque("ia70ss13m22znbl8khrf2hq72qmh5drr".to_string()),
        parse("/nix/store/ia70ss13m22znbl8khrf2hq72qmh5drr"),
    );

    // No base name to speak of.
    assert_eq!(ParsedName::Opaque(String::new()), parse("/"));
}

#[test]
fn test_label() {
    let labels = [
        ("/nix/store/ia70ss13m22znbl8khrf2hq72qmh5drr-ruby-2.7.5", "ruby-2.7.5"),
        ("/nix/store/7yw3rm6ccr6s2w6hnpzv1wkyyfsxjp3d-bar", "bar"),
        (
            "/nix/store/3iq73s1p4mh4mrflj2k1whkzsimxf0l7-gcc-wrapper-9.3.0",
            "gcc-wrapper-9.3.0",
        ),
        ("/nix/store/no_delimiter_here", "no_delimiter_here"),
    ];

    for (path, label) in labels {
        assert_eq!(label, StorePath::new(path).label());
    }
}

#[tokio::test]
async fn test_compute_fs_closure() {
    let runner = Arc::new(RecordingRunner::new());
    runner.push_output(
        "/nix/store/ia70ss13m22znbl8khrf2hq72qmh5drr-foo-1.2.3\n\
         /nix/store/7yw3rm6ccr6s2w6hnpzv1wkyyfsxjp3d-bar\n",
    );

    let store = NixStore::with_runner("nix-store", runner.clone());
    let root = StorePath::new("/nix/store/ia70ss13m22znbl8khrf2hq72qmh5drr-foo-1.2.3");
    let closure = store.compute_fs_closure(&root).await.unwrap();

    assert_eq!(
        vec![
            StorePath::new("/nix/store/ia70ss13m22znbl8khrf2hq72qmh5drr-foo-1.2.3"),
            StorePath::new("/nix/store/7yw3rm6ccr6s2w6hnpzv1wkyyfsxjp3d-bar"),
        ],
        closure,
    );

    let invocations = runner.invocations();
    assert_eq!(1, invocations.len());
    assert_eq!(OsStr::new("nix-store"), invocations[0].program());
    assert_eq!(
        vec![
            OsStr::new("--query"),
            OsStr::new("--requisites"),
            OsStr::new("/nix/store/ia70ss13m22znbl8khrf2hq72qmh5drr-foo-1.2.3"),
        ],
        invocations[0].arguments().to_vec(),
    );
}

#[tokio::test]
async fn test_compute_fs_closure_skips_blank_lines() {
    let runner = Arc::new(RecordingRunner::new());
    runner.push_output("/nix/store/7yw3rm6ccr6s2w6hnpzv1wkyyfsxjp3d-bar\n\n");

    let store = NixStore::with_runner("nix-store", runner);
    let root = StorePath::new("/nix/store/7yw3rm6ccr6s2w6hnpzv1wkyyfsxjp3d-bar");
    let closure = store.compute_fs_closure(&root).await.unwrap();

    assert_eq!(1, closure.len());
}

#[tokio::test]
async fn test_compute_fs_closure_rejects_non_utf8() {
    let runner = Arc::new(RecordingRunner::new());
    runner.push_output(vec![0xff, 0xfe, 0xfd]);

    let store = NixStore::with_runner("nix-store", runner);
    let root = StorePath::new("/nix/store/7yw3rm6ccr6s2w6hnpzv1wkyyfsxjp3d-bar");
    let e = store.compute_fs_closure(&root).await.unwrap_err();

    assert_eq!("CommandOutputInvalid", e.name());
}

#[tokio::test]
async fn test_graph_description() {
    let runner = Arc::new(RecordingRunner::new());
    runner.push_output("digraph G {}\n");

    let store = NixStore::with_runner("nix-store", runner.clone());
    let root = StorePath::new("/nix/store/7yw3rm6ccr6s2w6hnpzv1wkyyfsxjp3d-bar");
    let description = store.graph_description(&root).await.unwrap();

    assert_eq!(b"digraph G {}\n"[..], description[..]);

    let invocations = runner.invocations();
    assert_eq!(
        vec![
            OsStr::new("--query"),
            OsStr::new("--graph"),
            OsStr::new("/nix/store/7yw3rm6ccr6s2w6hnpzv1wkyyfsxjp3d-bar"),
        ],
        invocations[0].arguments().to_vec(),
    );
}
