use kp_utils::*;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Write;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Entry {
    weight: u64,
    value: u64,
}

#[test]
fn test_jsonify_sorts_nested_keys() {
    let value = json!({
        "zeta": 1,
        "alpha": {"b": 2, "a": 1},
        "records": [{"weight": 4, "value": 100, "item_position": 2}],
    });
    assert_eq!(
        jsonify(&value).unwrap(),
        r#"{"alpha":{"a":1,"b":2},"records":[{"item_position":2,"value":100,"weight":4}],"zeta":1}"#
    );
}

#[test]
fn test_jsonify_is_stable() {
    let entry = Entry {
        weight: 6,
        value: 120,
    };
    assert_eq!(jsonify(&entry).unwrap(), jsonify(&entry).unwrap());
    assert_eq!(jsonify(&entry).unwrap(), r#"{"value":120,"weight":6}"#);
}

#[test]
fn test_dejsonify_rejects_negative_for_unsigned() {
    assert!(dejsonify::<Entry>(r#"{"weight": -1, "value": 3}"#).is_err());
}

#[test]
fn test_compress_then_decompress() {
    let entries = vec![
        Entry {
            weight: 5,
            value: 60,
        },
        Entry {
            weight: 4,
            value: 100,
        },
    ];
    let compressed = compress_obj(&entries).unwrap();
    let restored: Vec<Entry> = decompress_obj(&compressed).unwrap();
    assert_eq!(restored, entries);
}

#[test]
fn test_decompress_garbage_fails() {
    assert!(decompress_obj::<Vec<Entry>>(b"not zlib").is_err());
}

#[test]
fn test_read_json_arg_inline_and_file() {
    let inline = r#"{"weight": 1, "value": 2}"#;
    assert_eq!(read_json_arg(inline).unwrap(), inline);

    let path = std::env::temp_dir().join(format!("kp-utils-{}.json", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(inline.as_bytes()).unwrap();
    drop(file);

    let loaded: Entry = load_json_arg(path.to_str().unwrap(), "entry").unwrap();
    assert_eq!(
        loaded,
        Entry {
            weight: 1,
            value: 2
        }
    );
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_missing_file_is_an_error() {
    let err = read_json_arg("/definitely/not/here.json").unwrap_err();
    assert!(err.to_string().contains("Failed to read file"));
}
