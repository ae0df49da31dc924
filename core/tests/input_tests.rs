/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for input validation and parsing functions

use space_core::input::*;
use uuid::Uuid;

#[test]
fn test_port_in_range() {
    assert_eq!(port_in_range("3000"), Ok(3000));
    assert_eq!(port_in_range("65535"), Ok(65535));
    assert_eq!(
        port_in_range("0"),
        Err("port not in range 1-65535".to_string())
    );
    assert_eq!(
        port_in_range("65536"),
        Err("port not in range 1-65535".to_string())
    );
    assert_eq!(
        port_in_range("http"),
        Err("`http` is not a port number".to_string())
    );
}

#[test]
fn test_greater_than_zero() {
    assert_eq!(greater_than_zero::<u32>("100"), Ok(100));
    assert_eq!(
        greater_than_zero::<u32>("0"),
        Err("`0` is not larger than 0".to_string())
    );
    assert_eq!(
        greater_than_zero::<u32>("-1"),
        Err("`-1` is not a valid number".to_string())
    );
}

#[test]
fn test_parse_project_id() {
    let id = Uuid::new_v4();
    assert_eq!(parse_project_id(&id.to_string()), Some(id));
    assert_eq!(parse_project_id(&format!(" {} ", id)), None);
    assert_eq!(parse_project_id(&format!("{}\n", id)), None);
    assert_eq!(parse_project_id("not-a-uuid"), None);
    assert_eq!(parse_project_id(""), None);
}

#[test]
fn test_load_secret() {
    let path = std::env::temp_dir().join(format!("space-secret-{}", Uuid::new_v4()));
    std::fs::write(&path, "postgres://space@localhost/space\n").unwrap();

    let secret = load_secret(path.to_str().unwrap()).unwrap();
    assert_eq!(secret, "postgres://space@localhost/space");

    std::fs::remove_file(&path).unwrap();
    assert!(load_secret(path.to_str().unwrap()).is_err());
}
