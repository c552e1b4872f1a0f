//! Loading tables and symbol lists from disk.

use std::fs;
use symbex::{
    Error, Options, TriggerPolicy, expand_with, load_symbol_list_file, load_table_file, parse_table_json,
    table_to_json,
};

#[test]
fn table_feed_file_drives_expansion() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("table.json");
    fs::write(
        &path,
        r#"[
            {"key": ":check:", "val": "✓", "f": 1},
            {"key": "(c)", "val": "©", "f": 0},
            {"key": "::sig::", "val": "Regards,<br>Ann", "f": 2}
        ]"#,
    )
    .unwrap();

    let table = load_table_file(&path).unwrap();
    let out = expand_with("done :check: (c) ::sig::", &table, &Options::default());

    assert_eq!(out.text, "done ✓ © Regards,\nAnn");
}

#[test]
fn symbol_list_file_is_classified_and_ordered() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("symbols.json");
    fs::write(&path, r#"[["--", "‒"], ["---", "—"], [":deg:", "°"], ["::hr::", "<hr>"]]"#).unwrap();

    let list = load_symbol_list_file(&path).unwrap();
    let table = list.to_table().unwrap();

    let keys: Vec<&str> = table.iter().map(|r| r.key()).collect();
    assert_eq!(keys, vec!["::hr::", ":deg:", "---", "--"]);
    assert!(table.rules()[0].is_markup());
    assert_eq!(table.rules()[1].policy(), TriggerPolicy::Immediate);
    assert_eq!(table.rules()[3].policy(), TriggerPolicy::OnWhitespaceBoundary);

    let out = expand_with("a --- b -- 20:deg: ", &table, &Options::default());
    assert_eq!(out.text, "a — b ‒ 20° ");
}

#[test]
fn written_table_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roundtrip.json");
    let table = parse_table_json(r#"[{"key": "->", "val": "→", "f": 1}, {"key": "1/2", "val": "½", "f": 0}]"#)
        .unwrap();

    fs::write(&path, table_to_json(&table).unwrap()).unwrap();

    assert_eq!(load_table_file(&path).unwrap(), table);
}

#[test]
fn load_errors_name_the_problem() {
    let dir = tempfile::tempdir().unwrap();

    let missing = dir.path().join("missing.json");
    match load_table_file(&missing).unwrap_err() {
        Error::Io { path, .. } => assert_eq!(path, missing),
        other => panic!("unexpected error: {other}"),
    }

    let bad_flag = dir.path().join("bad_flag.json");
    fs::write(&bad_flag, r#"[{"key": "a", "val": "b", "f": 3}]"#).unwrap();
    assert!(matches!(load_table_file(&bad_flag), Err(Error::UnknownFlag { index: 0, flag: 3 })));

    let bad_rows = dir.path().join("bad_rows.json");
    fs::write(&bad_rows, r#"[[":a:", "α"], [":b:"]]"#).unwrap();
    assert!(matches!(load_symbol_list_file(&bad_rows), Err(Error::InvalidFormat { issues }) if issues.len() == 1));

    let not_json = dir.path().join("not_json.json");
    fs::write(&not_json, "key = value").unwrap();
    assert!(matches!(load_table_file(&not_json), Err(Error::Json(_))));
}
